//! Todo Starter Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init(200, log::LevelFilter::Debug) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", err).into());
    }
    mount_to_body(App);
}
