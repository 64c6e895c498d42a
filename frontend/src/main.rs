//! Grok List Main Entry Point

mod app;
mod config;
mod dataflow;
mod db;
mod debug_utils;
mod dev_api;
mod error;
mod events;
mod store;
mod subs;
mod view;

use crate::app::GrokListApp;
use crate::config::AppConfig;

pub fn main() {
    let config = AppConfig::from_build();
    debug_utils::debug_log(&config, "dev mode");

    let app = GrokListApp::new(config);

    if config.debug {
        dev_api::expose_dev_api(app.clone());
    }

    if let Err(error) = app.mount() {
        debug_utils::debug_critical(&error.to_string());
    }
}
