use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use log::info;

use crate::browser::{self, BrowserStorage};
use crate::config::PageConfig;
use crate::pages::portfolio::PortfolioPage;
use crate::scroll_spy::{use_scroll_spy, ScrollSpy, ScrollSpyContext, SECTIONS};
use crate::theme::{apply_theme, ThemeContext, ThemeStore};

#[component]
pub fn App() -> impl IntoView {
    let config = PageConfig::default();

    let theme = ThemeContext {
        store: RwSignal::new(ThemeStore::new(BrowserStorage, config.theme_storage_key)),
    };
    provide_context(theme);

    let nav = ScrollSpyContext::new(ScrollSpy::new(SECTIONS, config.nav_offset_px));
    provide_context(nav);
    use_scroll_spy(nav.spy);

    // Resolve the saved theme preference on mount
    Effect::new(move |_| {
        theme.store.update(|store| {
            if store.is_initialized() {
                return;
            }
            let resolved = store.initialize(browser::system_theme(), config.default_theme);
            info!("Theme: {}", resolved);
            if store.is_session_only() {
                info!("Theme preference will not persist beyond this session");
            }
        });
    });

    // Apply theme to DOM whenever the store changes
    Effect::new(move |_| {
        if let Some(current) = theme.current() {
            apply_theme(current);
        }
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <p>"Page not found"</p> }>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}
