mod app;
mod auth;
mod components;
mod config;
mod pages;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;

/// Route `tracing` output to the browser console
fn init_logging() {
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time() // std::time is unavailable on wasm32
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    tracing_subscriber::registry().with(LevelFilter::DEBUG).with(console).init();
}

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    leptos::mount::mount_to_body(app::App);
}
