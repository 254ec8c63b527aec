use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::ExperienceEntry;

#[component]
pub fn ExperienceSection(entries: Vec<ExperienceEntry>) -> impl IntoView {
    view! {
        <section id="experience" class="section section-muted">
            <div class="container container-narrow">
                <SectionHeader title="Practical Experience" />
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <div class="card">
                                <div class="card-row">
                                    <span class="card-icon">"\u{1F4BC}"</span>
                                    <div>
                                        <h3 class="card-title">{entry.title}</h3>
                                        <p class="muted">{entry.duration}</p>
                                    </div>
                                </div>
                                <ul class="bullet-list">
                                    {entry
                                        .highlights
                                        .into_iter()
                                        .map(|item| view! { <li>{item}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
