use leptos::prelude::*;

#[component]
pub fn SectionHeader(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{title}</h2>
            <div class="section-rule"></div>
        </div>
    }
}
