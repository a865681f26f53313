//! Todo Frontend Entry Point

mod actions;
mod app;
mod cache;
mod components;
mod config;
mod context;
mod error;
mod graphql;
mod logger;
mod models;
mod store;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_build_env();
    logger::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
