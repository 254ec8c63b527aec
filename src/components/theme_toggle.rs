use leptos::prelude::*;

use crate::theme::{ThemeContext, ThemePreference};

/// Round button flipping light/dark. Renders nothing until the theme store
/// has initialized, so the icon never flashes the wrong mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    move || {
        theme.current().map(|current| {
            let (icon, label) = match current {
                ThemePreference::Light => ("\u{263E}", "Switch to dark theme"),
                ThemePreference::Dark => ("\u{2600}", "Switch to light theme"),
            };
            view! {
                <button
                    class="theme-toggle"
                    title=label
                    aria-label=label
                    on:click=move |_| theme.toggle()
                >
                    {icon}
                </button>
            }
        })
    }
}
