// crates/distortion-app/src/render.rs
// Maps a classification response onto the result view model.
// Components insert these strings as text nodes, never as markup.

use distortion_types::{find_definition, ClassificationResponse, DetectedDistortion};

pub const DISTORTION_DETECTED: &str = "Cognitive distortion detected";
pub const NO_DISTORTION: &str = "No distortion detected";
pub const EMPTY_LIST_PLACEHOLDER: &str = "No specific distortions detected.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Good,
    Bad,
}

impl BadgeTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistortionItem {
    pub name: String,
    pub confidence_label: String,
    /// `confidence-<level>`, always lower-case
    pub confidence_class: String,
    pub explanation: String,
    /// Taxonomy description and cue phrases, shown as a tooltip when the name is known
    pub description: Option<String>,
}

impl DistortionItem {
    fn from_distortion(d: &DetectedDistortion) -> Self {
        Self {
            name: d.name.clone(),
            confidence_label: d.confidence_label().to_string(),
            confidence_class: format!("confidence-{}", d.confidence_level().as_str()),
            explanation: d.explanation.clone(),
            description: find_definition(&d.name).map(|def| def.tooltip()),
        }
    }
}

/// Everything the result region shows after a successful call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub badge: Badge,
    pub summary: String,
    pub items: Vec<DistortionItem>,
    pub raw_json: String,
}

impl ResultView {
    pub fn from_response(resp: &ClassificationResponse) -> Self {
        let badge = if resp.has_cognitive_distortion {
            Badge {
                label: DISTORTION_DETECTED,
                tone: BadgeTone::Bad,
            }
        } else {
            Badge {
                label: NO_DISTORTION,
                tone: BadgeTone::Good,
            }
        };

        Self {
            badge,
            summary: summary_line(resp.distortion_count),
            items: resp.distortions.iter().map(DistortionItem::from_distortion).collect(),
            raw_json: resp.pretty_json(),
        }
    }

    pub fn shows_placeholder(&self) -> bool {
        self.items.is_empty()
    }
}

/// "Detected 1 distortion." / "Detected N distortions."
pub fn summary_line(count: f64) -> String {
    let noun = if count == 1.0 { "distortion" } else { "distortions" };
    format!("Detected {} {}.", count, noun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view(value: serde_json::Value) -> ResultView {
        ResultView::from_response(&ClassificationResponse::from_value(value))
    }

    #[test]
    fn test_summary_pluralization() {
        assert_eq!(summary_line(1.0), "Detected 1 distortion.");
        assert_eq!(summary_line(0.0), "Detected 0 distortions.");
        assert_eq!(summary_line(2.0), "Detected 2 distortions.");
        assert_eq!(summary_line(1.5), "Detected 1.5 distortions.");
    }

    #[test]
    fn test_overgeneralization_scenario() {
        let v = view(json!({
            "has_cognitive_distortion": true,
            "distortion_count": 1,
            "distortions": [{
                "name": "Overgeneralization",
                "confidence": "high",
                "explanation": "Uses absolute terms like 'always'."
            }]
        }));
        assert_eq!(v.badge.label, DISTORTION_DETECTED);
        assert_eq!(v.badge.tone, BadgeTone::Bad);
        assert_eq!(v.summary, "Detected 1 distortion.");
        assert_eq!(v.items.len(), 1);
        assert_eq!(v.items[0].confidence_label, "high");
        assert_eq!(v.items[0].confidence_class, "confidence-high");
        let tip = v.items[0].description.as_deref().unwrap();
        assert!(tip.starts_with("Making sweeping conclusions from a single event."));
        assert!(tip.contains("\"everyone\""));
        assert!(v.raw_json.contains("\"Overgeneralization\""));
    }

    #[test]
    fn test_flag_without_list_shows_placeholder() {
        let v = view(json!({"has_cognitive_distortion": true}));
        assert!(v.shows_placeholder());
        assert_eq!(v.summary, "Detected 0 distortions.");
        assert_eq!(v.badge.tone, BadgeTone::Bad);
    }

    #[test]
    fn test_negative_badge() {
        let v = view(json!({"has_cognitive_distortion": false, "distortions": []}));
        assert_eq!(v.badge.label, NO_DISTORTION);
        assert_eq!(v.badge.tone.css_class(), "good");
    }

    #[test]
    fn test_confidence_class_is_lower_cased_label_is_not() {
        let v = view(json!({
            "has_cognitive_distortion": true,
            "distortions": [
                {"name": "Labeling", "confidence": "HIGH", "explanation": "x"},
                {"name": "Mind Reading", "explanation": "y"}
            ]
        }));
        assert_eq!(v.items[0].confidence_label, "HIGH");
        assert_eq!(v.items[0].confidence_class, "confidence-high");
        assert_eq!(v.items[1].confidence_label, "medium");
        assert_eq!(v.items[1].confidence_class, "confidence-medium");
        assert_eq!(v.items[1].description, None);
    }

    #[test]
    fn test_markup_in_server_strings_is_kept_verbatim() {
        let v = view(json!({
            "has_cognitive_distortion": true,
            "distortions": [{"name": "<b>x</b>", "explanation": "<script>alert(1)</script>"}]
        }));
        assert_eq!(v.items[0].name, "<b>x</b>");
        assert_eq!(v.items[0].explanation, "<script>alert(1)</script>");
    }
}
