pub mod badge;
pub mod navbar;
pub mod section_header;
pub mod theme_toggle;
