use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::error::PortfolioError;
use crate::scroll_spy::SectionLayout;
use crate::theme::{PreferenceStore, ThemePreference};

fn js_error(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn local_storage() -> Result<web_sys::Storage, PortfolioError> {
    let window = web_sys::window()
        .ok_or_else(|| PortfolioError::StorageUnavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(|e| PortfolioError::StorageUnavailable(js_error(&e)))?
        .ok_or_else(|| PortfolioError::StorageUnavailable("localStorage disabled".to_string()))
}

/// `localStorage`-backed preference store.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, PortfolioError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| PortfolioError::StorageUnavailable(js_error(&e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| PortfolioError::StorageUnavailable(js_error(&e)))
    }
}

/// The host's `prefers-color-scheme`, if it states one.
pub fn system_theme() -> Option<ThemePreference> {
    let window = web_sys::window()?;
    let matches = |query: &str| {
        window
            .match_media(query)
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    };

    if matches("(prefers-color-scheme: dark)") {
        Some(ThemePreference::Dark)
    } else if matches("(prefers-color-scheme: light)") {
        Some(ThemePreference::Light)
    } else {
        None
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scroll the anchor `#id` into view.
pub fn scroll_to_section(id: &str) -> Result<(), PortfolioError> {
    let element = document()
        .and_then(|doc| doc.get_element_by_id(id))
        .ok_or_else(|| PortfolioError::ElementNotMounted(id.to_string()))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Percent-decode a URL fragment, dropping the leading `#`.
pub fn decode_fragment(raw: &str) -> String {
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    js_sys::decode_uri_component(raw)
        .map(String::from)
        .unwrap_or_else(|_| raw.to_string())
}

/// Reads section tops from the live document via `offsetTop`.
pub struct DomLayout;

impl SectionLayout for DomLayout {
    fn top_of(&self, id: &str) -> Option<f64> {
        let element = document()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;
        Some(f64::from(element.offset_top()))
    }
}
