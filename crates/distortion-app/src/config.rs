// crates/distortion-app/src/config.rs
// Page configuration and API base resolution

use crate::presets::{default_presets, Preset};

/// Global the hosting page may define before the wasm module loads
pub const API_BASE_GLOBAL: &str = "API_BASE_URL";
/// Fallback `<meta name=... content=...>` carrying the same value
pub const API_BASE_META: &str = "api-base-url";

/// Settings injected into the app once at mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Page-level default, used when the API field is blank
    pub default_api_base: Option<String>,
    pub presets: Vec<Preset>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_api_base: None,
            presets: default_presets(),
        }
    }
}

impl AppConfig {
    pub fn with_default_api_base(mut self, base: impl Into<String>) -> Self {
        self.default_api_base = non_empty(base.into());
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Read the page-level default from `window.API_BASE_URL`, then from the
    /// `api-base-url` meta tag.
    pub fn from_page() -> Self {
        let default_api_base = read_window_global().or_else(read_meta_tag);
        match &default_api_base {
            Some(base) => log::debug!("Default API base from page: {}", base),
            None => log::debug!("No default API base on page"),
        }
        Self {
            default_api_base,
            ..Self::default()
        }
    }

    /// Explicit field value, else the injected default, else unconfigured
    pub fn resolve_api_base(&self, field_value: &str) -> Option<String> {
        non_empty(field_value.to_string()).or_else(|| self.default_api_base.clone())
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn read_window_global() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(API_BASE_GLOBAL)).ok()?;
    value.as_string().and_then(non_empty)
}

fn read_meta_tag() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    let meta = document.query_selector(&selector).ok()??;
    meta.get_attribute("content").and_then(non_empty)
}
