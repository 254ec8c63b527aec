use leptos::prelude::*;

use crate::components::section_header::SectionHeader;

#[component]
pub fn AboutSection(#[prop(into)] objective: String) -> impl IntoView {
    view! {
        <section id="about" class="section section-muted">
            <div class="container">
                <SectionHeader title="Career Objective" />
                <div class="card card-narrow">
                    <p class="objective">{objective}</p>
                </div>
            </div>
        </section>
    }
}
