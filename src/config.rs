use crate::theme::ThemePreference;

/// Page-wide constants shared by the scroll-spy and the theme store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    /// Height of the sticky navigation bar, added to the scroll offset
    /// before comparing against section tops.
    pub nav_offset_px: f64,
    /// `localStorage` key holding the theme preference.
    pub theme_storage_key: &'static str,
    /// Theme used when nothing is stored and the system has no preference.
    pub default_theme: ThemePreference,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_offset_px: 100.0,
            theme_storage_key: "portfolio-theme",
            default_theme: ThemePreference::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert_eq!(config.nav_offset_px, 100.0);
        assert_eq!(config.theme_storage_key, "portfolio-theme");
        assert_eq!(config.default_theme, ThemePreference::Light);
    }
}
