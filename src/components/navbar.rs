use leptos::prelude::*;

use crate::scroll_spy::{ScrollSpyContext, Section};

#[component]
fn NavButton(
    section: Section,
    active: Memo<&'static str>,
    /// Drawer buttons stretch to the full width.
    #[prop(default = false)]
    block: bool,
) -> impl IntoView {
    let nav = expect_context::<ScrollSpyContext>();
    let id = section.id;
    let is_active = move || active.get() == id;

    let class = move || {
        let mut class = String::from("nav-link");
        if block {
            class.push_str(" nav-link-block");
        }
        if is_active() {
            class.push_str(" active");
        }
        class
    };

    view! {
        <button
            class=class
            aria-current=move || is_active().then_some("true")
            on:click=move |_| nav.navigate_to(id)
        >
            <span class="nav-icon">{section.icon}</span>
            <span>{section.label}</span>
        </button>
    }
}

/// Sticky top bar with one button per section and a mobile drawer.
#[component]
pub fn Navbar(#[prop(into)] name: String) -> impl IntoView {
    let nav = expect_context::<ScrollSpyContext>();
    let active = nav.active();
    let sections = nav.spy.with_untracked(|s| s.sections().to_vec());
    let drawer_sections = sections.clone();

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <div class="navbar-brand">{name}</div>

                <div class="nav-list">
                    {sections
                        .into_iter()
                        .map(|section| view! { <NavButton section=section active=active /> })
                        .collect_view()}
                </div>

                <button
                    class="menu-button"
                    aria-label="Toggle navigation"
                    aria-expanded=move || nav.menu_open.get().to_string()
                    on:click=move |_| nav.menu_open.update(|open| *open = !*open)
                >
                    {move || if nav.menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <Show when=move || nav.menu_open.get()>
                <div class="nav-drawer">
                    {drawer_sections
                        .iter()
                        .copied()
                        .map(|section| view! { <NavButton section=section active=active block=true /> })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
