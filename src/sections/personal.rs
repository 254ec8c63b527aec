use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::PersonalDetail;

#[component]
pub fn PersonalSection(details: Vec<PersonalDetail>) -> impl IntoView {
    view! {
        <section id="personal" class="section">
            <div class="container container-narrow">
                <SectionHeader title="Personal Details" />
                <div class="card">
                    {details
                        .into_iter()
                        .map(|detail| {
                            view! {
                                <div class="detail-row">
                                    <span class="detail-label">"\u{2665} " {detail.label}</span>
                                    <span class="muted">{detail.value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
