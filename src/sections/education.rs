use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::section_header::SectionHeader;
use crate::content::EducationRecord;

#[component]
pub fn EducationSection(records: Vec<EducationRecord>) -> impl IntoView {
    view! {
        <section id="education" class="section section-muted">
            <div class="container container-narrow">
                <SectionHeader title="Education" />
                {records
                    .into_iter()
                    .map(|record| {
                        let badges = record.badges();
                        view! {
                            <div class="card card-row">
                                <span class="card-icon">"\u{1F393}"</span>
                                <div>
                                    <h3 class="card-title">{record.degree}</h3>
                                    <p class="muted">{record.institution}</p>
                                    <p class="muted small">{record.period}</p>
                                    {badges
                                        .into_iter()
                                        .map(|(label, variant)| view! { <Badge label=label variant=variant /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
