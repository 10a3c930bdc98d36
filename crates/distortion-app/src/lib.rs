// crates/distortion-app/src/lib.rs
// Distortion Check - Leptos WASM frontend (CSR)

use leptos::prelude::*;
use leptos_meta::*;
use wasm_bindgen::prelude::*;

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod presets;
pub mod render;
pub mod surface;

mod components;
mod pages;

// Re-export shared types
pub use distortion_types::*;

pub use api::{ClassifyClient, GlooTransport, HttpReply, HttpTransport};
pub use config::AppConfig;
pub use controller::{FormController, SubmissionPhase, SubmitOutcome};
pub use error::ClassifyError;
pub use presets::Preset;
pub use render::ResultView;
pub use surface::{DisplaySurface, SignalSurface, Status, StatusKind};

use components::Layout;
use pages::ClassifyPage;

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    let config = AppConfig::from_page();
    log::info!(
        "Distortion Check starting (default API base: {})",
        config.default_api_base.as_deref().unwrap_or("unset")
    );

    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}

// ============================================================================
// App Root
// ============================================================================

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Distortion Check"/>
        <Layout>
            <ClassifyPage config=config/>
        </Layout>
    }
}
