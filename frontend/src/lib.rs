use leptos::*;

pub mod api;
pub mod app;
mod components;
pub mod config;
mod pages;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: logging, runtime configuration, then the app shell.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Logger already initialized: {}", err).into());
    }
    log::info!("Starting HRMS Lite frontend");

    spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });

    mount_to_body(app::App);
}
