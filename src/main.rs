//! DevHub Frontend Entry Point

mod models;
mod config;
mod api;
mod context;
mod router;
mod explorer;
mod store;
mod format;
mod markdown;
mod validation;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::Config::from_build_env();
    if let Err(e) = console_logger::init_logger("DevHub", config.log_level) {
        web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
