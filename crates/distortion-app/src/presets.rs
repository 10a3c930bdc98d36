// crates/distortion-app/src/presets.rs
// Canned example texts shown as pills above the input

use distortion_types::CBT_DISTORTIONS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub label: String,
    pub text: Option<String>,
}

impl Preset {
    pub fn new(label: impl Into<String>, text: Option<&str>) -> Self {
        Self {
            label: label.into(),
            text: text.map(str::to_string),
        }
    }

    /// Text written into the input field; empty when none is configured
    pub fn fill_text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// One pill per taxonomy entry plus a neutral control sentence
pub fn default_presets() -> Vec<Preset> {
    CBT_DISTORTIONS
        .iter()
        .map(|d| Preset::new(d.name, Some(d.example)))
        .chain(std::iter::once(Preset::new(
            "Neutral",
            Some("I am learning to code and I practice daily."),
        )))
        .collect()
}
