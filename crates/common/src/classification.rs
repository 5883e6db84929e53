//! Symptom classification types produced by the triage engine.

use serde::{Deserialize, Serialize};

/// Coarse severity tier derived from keyword presence.
///
/// Tiers are totally ordered: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    #[default]
    Low,
    Medium,
    High,
}

impl UrgencyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyTier::Low => "low",
            UrgencyTier::Medium => "medium",
            UrgencyTier::High => "high",
        }
    }
}

impl std::fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of classifying one patient message.
///
/// Built fresh for each request and never mutated afterwards. `entities`
/// holds matched symptom terms and `red_flags` matched red-flag terms,
/// both in lexicon order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Symptom terms found in the input text
    pub entities: Vec<String>,

    /// Red-flag terms found in the input text
    pub red_flags: Vec<String>,

    /// Derived urgency tier
    pub urgency: UrgencyTier,
}

impl Classification {
    /// The classification of text with no recognized terms.
    pub fn unremarkable() -> Self {
        Self {
            entities: Vec::new(),
            red_flags: Vec::new(),
            urgency: UrgencyTier::Low,
        }
    }

    /// Whether any red-flag term matched.
    pub fn has_red_flags(&self) -> bool {
        !self.red_flags.is_empty()
    }

    /// Whether emergency screening is required before specialist routing.
    pub fn requires_screening(&self) -> bool {
        self.urgency == UrgencyTier::High
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::unremarkable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_ordering() {
        assert!(UrgencyTier::High > UrgencyTier::Medium);
        assert!(UrgencyTier::Medium > UrgencyTier::Low);
        assert_eq!(UrgencyTier::default(), UrgencyTier::Low);
    }

    #[test]
    fn test_urgency_serializes_lowercase() {
        let json = serde_json::to_string(&UrgencyTier::High).unwrap();
        assert_eq!(json, r#""high""#);
        let back: UrgencyTier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UrgencyTier::High);
    }

    #[test]
    fn test_unremarkable_classification() {
        let c = Classification::unremarkable();
        assert!(c.entities.is_empty());
        assert!(c.red_flags.is_empty());
        assert_eq!(c.urgency, UrgencyTier::Low);
        assert!(!c.has_red_flags());
        assert!(!c.requires_screening());
    }

    #[test]
    fn test_classification_serialization_round_trip() {
        let c = Classification {
            entities: vec!["cough".into(), "fever".into()],
            red_flags: vec![],
            urgency: UrgencyTier::Low,
        };

        let json = serde_json::to_string(&c).unwrap();
        let back: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
