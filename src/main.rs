//! Feedback Reorder Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod dom;
mod error;
mod ids;
mod logger;
mod models;
mod persist;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    if let Err(e) = app::boot() {
        log::error!("reordering disabled: {}", e);
    }
}
