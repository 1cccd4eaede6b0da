//! Company Lens browser entry point

use lens_web::{App, SiteConfig};
use leptos::*;
use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = SiteConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_else(|_| SiteConfig::from_env());
    let level = config.level();
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(*level.as_ref().unwrap_or(&Level::INFO))
            .build(),
    );
    if let Err(err) = loaded {
        tracing::warn!(%err, "embedded site configuration rejected, using defaults");
    }
    if let Err(err) = level {
        tracing::warn!(%err, "using default log level");
    }

    tracing::info!(brand = %config.brand_name, "mounting application");
    mount_to_body(move || {
        view! {
            <App config=config.clone()/>
        }
    });
}
