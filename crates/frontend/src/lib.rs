pub mod app;
pub mod dashboards;
pub mod layout;
pub mod shared;

use app::App;
use contracts::dashboards::d404_recommender_overview::DashboardContent;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let content = match DashboardContent::embedded() {
        Ok(content) => content,
        Err(e) => {
            log::error!("dashboard content rejected: {e}");
            return;
        }
    };

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&content.header.title);
    }

    log::info!(
        "mounting recommender overview ({} components, {} pipeline stages)",
        content.architecture.components.len(),
        content.pipeline.stages.len()
    );
    leptos::mount::mount_to_body(move || view! { <App content=content /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
