use leptos::prelude::*;

use crate::components::section_header::SectionHeader;

#[component]
pub fn CertificationsSection(certifications: Vec<String>) -> impl IntoView {
    view! {
        <section id="certifications" class="section">
            <div class="container container-narrow">
                <SectionHeader title="Certifications" />
                <div class="grid-2">
                    {certifications
                        .into_iter()
                        .map(|cert| {
                            view! {
                                <div class="card card-row card-hover">
                                    <span class="card-icon">"\u{1F3C5}"</span>
                                    <p class="cert-name">{cert}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
