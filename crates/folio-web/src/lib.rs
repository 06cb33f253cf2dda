//! Browser frontend for the portfolio page.
//!
//! Leptos components render the page from [`folio_config::FolioConfig`];
//! the `browser` module adapts DOM APIs (script tags, intersection
//! observers, smooth scrolling, the halo effect library) to the state
//! machines in `folio_motion`.

pub mod browser;
pub mod components;
pub mod logging;
pub mod model;

use leptos::prelude::*;
use tracing::{debug, info, warn};

use components::Portfolio;

/// Entry point: set up logging, load the bundled config, mount the page.
pub fn run() {
    console_error_panic_hook::set_once();

    let (config, load_error) = match folio_config::load_embedded() {
        Ok(config) => (config, None),
        Err(e) => (folio_config::FolioConfig::default(), Some(e)),
    };
    logging::init(&config.logging);
    if let Some(e) = load_error {
        warn!("bundled config rejected, using defaults: {e}");
    }
    debug!(config = %folio_config::config_to_json(&config), "resolved config");

    if let Err(e) = browser::dom::set_title(&config.site.title) {
        warn!("failed to set document title: {e}");
    }

    info!(
        skills = config.skills.items.len(),
        projects = config.projects.items.len(),
        background = config.background.enabled,
        "mounting portfolio"
    );
    mount_to_body(move || view! { <Portfolio config=config /> });
}
