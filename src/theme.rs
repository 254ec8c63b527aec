use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::browser::BrowserStorage;
use crate::error::PortfolioError;

/// Visual mode of the page. Persisted as the literal string `"light"` or `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(PortfolioError::InvalidTheme(other.to_string())),
        }
    }
}

/// Durable key-value storage for the theme preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, PortfolioError>;
    fn save(&self, key: &str, value: &str) -> Result<(), PortfolioError>;
}

/// Owns the active theme. `current` stays `None` until `initialize` runs,
/// and consumers render no theme-dependent control while it does.
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    storage: S,
    key: &'static str,
    current: Option<ThemePreference>,
    session_only: bool,
}

impl<S: PreferenceStore> ThemeStore<S> {
    pub fn new(storage: S, key: &'static str) -> Self {
        Self {
            storage,
            key,
            current: None,
            session_only: false,
        }
    }

    /// Resolve the starting theme: stored value, then the system color scheme,
    /// then `fallback`. Subsequent calls return the already-resolved theme.
    pub fn initialize(
        &mut self,
        system: Option<ThemePreference>,
        fallback: ThemePreference,
    ) -> ThemePreference {
        if let Some(theme) = self.current {
            return theme;
        }

        let stored = match self.storage.load(self.key) {
            Ok(Some(raw)) => match raw.parse::<ThemePreference>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    warn!("Ignoring stored theme: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Theme preference is session-only: {}", e);
                self.session_only = true;
                None
            }
        };

        let theme = stored.or(system).unwrap_or(fallback);
        debug!(
            "Theme initialized to {} (stored: {:?}, system: {:?})",
            theme, stored, system
        );
        self.current = Some(theme);
        theme
    }

    /// Flip the theme and persist it. Returns `None` (and changes nothing)
    /// before `initialize`.
    pub fn toggle(&mut self) -> Option<ThemePreference> {
        let next = self.current?.toggled();
        self.current = Some(next);
        self.persist(next);
        debug!("Theme toggled to {}", next);
        Some(next)
    }

    pub fn current(&self) -> Option<ThemePreference> {
        self.current
    }

    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    /// True once a storage read or the latest write failed.
    pub fn is_session_only(&self) -> bool {
        self.session_only
    }

    fn persist(&mut self, theme: ThemePreference) {
        match self.storage.save(self.key, theme.as_str()) {
            Ok(()) => self.session_only = false,
            Err(e) => {
                warn!("Failed to persist theme, keeping it for this session: {}", e);
                self.session_only = true;
            }
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub store: RwSignal<ThemeStore<BrowserStorage>>,
}

impl ThemeContext {
    /// Reactive read of the active theme.
    pub fn current(&self) -> Option<ThemePreference> {
        self.store.with(|s| s.current())
    }

    pub fn toggle(&self) {
        self.store.update(|s| {
            s.toggle();
        });
    }
}

/// Apply the theme to `<html>`: `data-theme` attribute plus the `dark` class.
pub fn apply_theme(theme: ThemePreference) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                let _ = html.set_attribute("data-theme", theme.as_str());
                let _ = html
                    .class_list()
                    .toggle_with_force("dark", theme == ThemePreference::Dark);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    const KEY: &str = "portfolio-theme";

    /// Shared in-memory storage; clones see the same entries, like tabs of one browser.
    #[derive(Clone, Default)]
    struct MemoryStore {
        entries: Rc<RefCell<HashMap<String, String>>>,
        unavailable: bool,
    }

    impl MemoryStore {
        fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }

        fn with_entry(value: &str) -> Self {
            let store = Self::default();
            store
                .entries
                .borrow_mut()
                .insert(KEY.to_string(), value.to_string());
            store
        }

        fn get(&self) -> Option<String> {
            self.entries.borrow().get(KEY).cloned()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Result<Option<String>, PortfolioError> {
            if self.unavailable {
                return Err(PortfolioError::StorageUnavailable("disabled".to_string()));
            }
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn save(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
            if self.unavailable {
                return Err(PortfolioError::StorageUnavailable("disabled".to_string()));
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("light".parse::<ThemePreference>().unwrap(), ThemePreference::Light);
        assert_eq!("dark".parse::<ThemePreference>().unwrap(), ThemePreference::Dark);
        assert!("system".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
        assert_eq!(
            serde_json::to_string(&ThemePreference::Light).unwrap(),
            "\"light\""
        );
    }

    #[test]
    fn test_current_is_none_before_initialize() {
        let store = ThemeStore::new(MemoryStore::default(), KEY);
        assert!(!store.is_initialized());
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_toggle_before_initialize_is_noop() {
        let mem = MemoryStore::default();
        let mut store = ThemeStore::new(mem.clone(), KEY);
        assert_eq!(store.toggle(), None);
        assert_eq!(store.current(), None);
        assert_eq!(mem.get(), None);
    }

    #[test]
    fn test_initialize_uses_system_preference_when_unset() {
        let mut store = ThemeStore::new(MemoryStore::default(), KEY);
        let theme = store.initialize(Some(ThemePreference::Dark), ThemePreference::Light);
        assert_eq!(theme, ThemePreference::Dark);
        assert_eq!(store.current(), Some(ThemePreference::Dark));
    }

    #[test]
    fn test_initialize_defaults_to_light() {
        let mut store = ThemeStore::new(MemoryStore::default(), KEY);
        assert_eq!(
            store.initialize(None, ThemePreference::Light),
            ThemePreference::Light
        );
    }

    #[test]
    fn test_stored_value_wins_over_system() {
        let mut store = ThemeStore::new(MemoryStore::with_entry("light"), KEY);
        assert_eq!(
            store.initialize(Some(ThemePreference::Dark), ThemePreference::Light),
            ThemePreference::Light
        );
    }

    #[test]
    fn test_invalid_stored_value_falls_through() {
        let mut store = ThemeStore::new(MemoryStore::with_entry("system"), KEY);
        assert_eq!(
            store.initialize(Some(ThemePreference::Dark), ThemePreference::Light),
            ThemePreference::Dark
        );
        assert!(!store.is_session_only());
    }

    #[test]
    fn test_initialize_runs_once() {
        let mem = MemoryStore::default();
        let mut store = ThemeStore::new(mem.clone(), KEY);
        store.initialize(None, ThemePreference::Light);
        mem.save(KEY, "dark").unwrap();
        assert_eq!(
            store.initialize(Some(ThemePreference::Dark), ThemePreference::Dark),
            ThemePreference::Light
        );
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let mem = MemoryStore::default();
        let mut store = ThemeStore::new(mem.clone(), KEY);
        store.initialize(None, ThemePreference::Light);

        assert_eq!(store.toggle(), Some(ThemePreference::Dark));
        assert_eq!(store.current(), Some(ThemePreference::Dark));
        assert_eq!(mem.get().as_deref(), Some("dark"));

        assert_eq!(store.toggle(), Some(ThemePreference::Light));
        assert_eq!(mem.get().as_deref(), Some("light"));
    }

    #[test]
    fn test_persisted_theme_survives_fresh_initialize() {
        let mem = MemoryStore::default();
        let mut first = ThemeStore::new(mem.clone(), KEY);
        first.initialize(None, ThemePreference::Light);
        first.toggle();

        let mut reloaded = ThemeStore::new(mem, KEY);
        assert_eq!(
            reloaded.initialize(Some(ThemePreference::Light), ThemePreference::Light),
            ThemePreference::Dark
        );
    }

    #[test]
    fn test_unavailable_storage_degrades_to_session() {
        let mut store = ThemeStore::new(MemoryStore::unavailable(), KEY);
        assert_eq!(
            store.initialize(Some(ThemePreference::Dark), ThemePreference::Light),
            ThemePreference::Dark
        );
        assert!(store.is_session_only());

        assert_eq!(store.toggle(), Some(ThemePreference::Light));
        assert_eq!(store.current(), Some(ThemePreference::Light));
        assert!(store.is_session_only());
    }
}
