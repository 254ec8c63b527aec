mod app;
mod browser;
mod components;
mod config;
mod content;
mod error;
mod pages;
mod scroll_spy;
mod sections;
mod theme;

use app::App;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    log::info!("Mounting portfolio");

    leptos::mount::mount_to_body(App);
}
