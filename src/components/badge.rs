use leptos::prelude::*;

/// Visual weight of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge-default",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Outline => "badge badge-outline",
        }
    }
}

#[component]
pub fn Badge(
    /// Badge text, e.g. "Python" or "CGPA: 8.84"
    #[prop(into)]
    label: String,
    #[prop(default = BadgeVariant::Secondary)] variant: BadgeVariant,
) -> impl IntoView {
    view! { <span class=variant.class()>{label}</span> }
}
