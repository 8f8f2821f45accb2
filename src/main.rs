//! Questionnaire Editor Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;
use questionnaire_model::EditorConfig;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match commands::load_host_config() {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (EditorConfig::default(), Some(e)),
    };
    logger::init(config.level_filter());
    if let Some(e) = config_error {
        log::warn!("[APP] Ignoring host config: {}", e);
    }
    log::info!("[APP] Starting questionnaire editor");

    mount_to_body(move || view! { <App config=config /> });
}
