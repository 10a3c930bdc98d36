// crates/distortion-types/src/lib.rs
// Shared types for the classify API (native + WASM compatible)
// No web-only dependencies allowed here

use serde::{Deserialize, Serialize};
use serde_json::Value;

mod taxonomy;

pub use taxonomy::{find_definition, DistortionDefinition, CBT_DISTORTIONS};

/// Confidence label used when the classifier omits one
pub const DEFAULT_CONFIDENCE: &str = "medium";

// ═══════════════════════════════════════
// REQUEST
// ═══════════════════════════════════════

/// Body of `POST /classify`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifyRequest {
    pub text: String,
}

impl ClassifyRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

// ═══════════════════════════════════════
// CONFIDENCE
// ═══════════════════════════════════════

/// Coarse certainty reported for a detected distortion
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Confidence {
    Low,
    Medium,
    High,
    /// Any label outside the known three, lower-cased
    Other(String),
}

impl Confidence {
    /// Parse a label case-insensitively. Empty labels fall back to medium.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "" | "medium" => Self::Medium,
            "low" => Self::Low,
            "high" => Self::High,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Other(label) => label,
        }
    }
}

// ═══════════════════════════════════════
// RESPONSE
// ═══════════════════════════════════════

/// One distortion reported by the classifier
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetectedDistortion {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    #[serde(default)]
    pub explanation: String,
}

impl DetectedDistortion {
    /// Read an entry of the `distortions` array without rejecting odd shapes.
    fn from_value(value: &Value) -> Self {
        let Value::Object(fields) = value else {
            return Self::default();
        };

        let confidence = match fields.get("confidence") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(v) if is_truthy(v) => Some(display_text(v)),
            _ => None,
        };

        Self {
            name: fields.get("name").map(display_text).unwrap_or_default(),
            confidence,
            explanation: fields.get("explanation").map(display_text).unwrap_or_default(),
        }
    }

    /// Label shown in the confidence tag, as reported by the classifier
    pub fn confidence_label(&self) -> &str {
        self.confidence.as_deref().unwrap_or(DEFAULT_CONFIDENCE)
    }

    pub fn confidence_level(&self) -> Confidence {
        Confidence::parse(self.confidence_label())
    }
}

/// Decoded body of a successful `POST /classify`.
///
/// Decoding is lenient: only the JSON syntax itself can fail. Missing or
/// mistyped fields fall back to defaults and the original document is kept
/// in `raw` for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResponse {
    pub has_cognitive_distortion: bool,
    pub distortion_count: f64,
    pub distortions: Vec<DetectedDistortion>,
    pub raw: Value,
}

impl ClassificationResponse {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let raw: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(raw))
    }

    pub fn from_value(raw: Value) -> Self {
        let has_cognitive_distortion = raw
            .get("has_cognitive_distortion")
            .map(is_truthy)
            .unwrap_or(false);

        let distortions: Vec<DetectedDistortion> = match raw.get("distortions") {
            Some(Value::Array(items)) => items.iter().map(DetectedDistortion::from_value).collect(),
            _ => Vec::new(),
        };

        let distortion_count = raw
            .get("distortion_count")
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite())
            .unwrap_or(distortions.len() as f64);

        Self {
            has_cognitive_distortion,
            distortion_count,
            distortions,
            raw,
        }
    }

    /// Two-space indented rendering of the original document
    pub fn pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

/// JSON truthiness: false, null, 0, NaN and "" are false
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strings as-is, null as empty, everything else as its JSON text
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
