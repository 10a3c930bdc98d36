// crates/distortion-types/src/taxonomy.rs
// Static CBT distortion taxonomy the classifier reports against

/// Taxonomy entry describing one cognitive distortion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistortionDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub cues: &'static [&'static str],
    pub example: &'static str,
}

impl DistortionDefinition {
    /// Description followed by the quoted cue phrases
    pub fn tooltip(&self) -> String {
        let cues: Vec<String> = self.cues.iter().map(|c| format!("\"{}\"", c)).collect();
        format!("{} Cues: {}", self.description, cues.join(", "))
    }
}

pub const CBT_DISTORTIONS: &[DistortionDefinition] = &[
    DistortionDefinition {
        name: "All-or-Nothing Thinking",
        description: "Viewing situations in absolute, black-or-white terms without nuance.",
        cues: &["always", "never", "either/or", "all or nothing", "perfect or failure"],
        example: "It is either perfect or a complete failure.",
    },
    DistortionDefinition {
        name: "Overgeneralization",
        description: "Making sweeping conclusions from a single event.",
        cues: &["everyone", "no one", "nothing ever works", "everything", "never again"],
        example: "Everyone ignores me every time I speak.",
    },
    DistortionDefinition {
        name: "Mental Filter",
        description: "Focusing only on the negative details while ignoring positives.",
        cues: &["only the mistakes", "just the problems", "ignore the good parts"],
        example: "I only noticed the mistakes in my presentation.",
    },
    DistortionDefinition {
        name: "Disqualifying the Positive",
        description: "Rejecting or discounting positive experiences.",
        cues: &["just luck", "doesn't count", "anyone could do it"],
        example: "I did fine, but it was just luck and doesn't count.",
    },
    DistortionDefinition {
        name: "Jumping to Conclusions",
        description: "Assuming outcomes or others' thoughts without evidence.",
        cues: &["they must think", "I know they'll", "it will definitely"],
        example: "They must think I'm incompetent.",
    },
    DistortionDefinition {
        name: "Magnification/Minimization",
        description: "Exaggerating negatives or downplaying positives.",
        cues: &["disaster", "ruined", "massive problem", "just a fluke", "not a big deal"],
        example: "This small mistake is a complete disaster.",
    },
    DistortionDefinition {
        name: "Emotional Reasoning",
        description: "Assuming feelings reflect facts.",
        cues: &["I feel like", "it feels as if", "because I feel it, it is true"],
        example: "I feel like I'm a failure, so it must be true.",
    },
    DistortionDefinition {
        name: "Should Statements",
        description: "Using rigid 'should', 'must', or 'ought' statements.",
        cues: &["should", "must", "ought", "have to", "supposed to"],
        example: "I should never make mistakes.",
    },
    DistortionDefinition {
        name: "Labeling",
        description: "Assigning a global, negative label to oneself or others.",
        cues: &["I am a failure", "you're useless", "they're idiots"],
        example: "I am a total failure.",
    },
    DistortionDefinition {
        name: "Personalization",
        description: "Blaming oneself for events outside one's control.",
        cues: &["my fault", "because of me", "it's on me"],
        example: "The project's delay is entirely my fault.",
    },
    DistortionDefinition {
        name: "Catastrophizing",
        description: "Assuming the worst-case scenario will happen.",
        cues: &["it will be a disaster", "everything will collapse", "this will ruin everything"],
        example: "If I slip once, everything will fall apart.",
    },
];

/// Look up a taxonomy entry by display name, ignoring case
pub fn find_definition(name: &str) -> Option<&'static DistortionDefinition> {
    let name = name.trim();
    CBT_DISTORTIONS
        .iter()
        .find(|d| d.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_taxonomy_names_unique() {
        let names: HashSet<_> = CBT_DISTORTIONS.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), CBT_DISTORTIONS.len());
        assert_eq!(CBT_DISTORTIONS.len(), 11);
    }

    #[test]
    fn test_every_entry_has_example_and_cues() {
        for d in CBT_DISTORTIONS {
            assert!(!d.example.is_empty(), "{} has no example", d.name);
            assert!(!d.cues.is_empty(), "{} has no cues", d.name);
        }
    }

    #[test]
    fn test_find_definition_case_insensitive() {
        let d = find_definition("  overgeneralization ").unwrap();
        assert_eq!(d.name, "Overgeneralization");
        assert!(find_definition("Mind Reading").is_none());
    }

    #[test]
    fn test_tooltip_lists_cues() {
        let d = find_definition("Overgeneralization").unwrap();
        let tip = d.tooltip();
        assert!(tip.starts_with("Making sweeping conclusions from a single event. Cues: "));
        assert!(tip.contains("\"everyone\", \"no one\""));
    }
}
