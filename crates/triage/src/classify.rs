//! Keyword-based symptom classification.

use crate::lexicon::Lexicon;
use caduceus_common::{Classification, UrgencyTier};
use tracing::debug;

/// Classifies free-text patient input against a fixed lexicon.
///
/// `classify` is deterministic and total: any input string, including the
/// empty string, yields a classification. No I/O, no side effects.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    lexicon: Lexicon,
}

impl Classifier {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classify patient text into matched entities, matched red flags, and
    /// an urgency tier.
    ///
    /// Urgency policy, in order:
    /// 1. any red-flag match → high
    /// 2. any matched entity in the escalation subset → medium
    /// 3. otherwise → low
    pub fn classify(&self, text: &str) -> Classification {
        let lowered = text.to_lowercase();

        let entities = self.lexicon.symptom_matches(&lowered);
        let red_flags = self.lexicon.red_flag_matches(&lowered);

        let urgency = if !red_flags.is_empty() {
            UrgencyTier::High
        } else if entities.iter().any(|e| self.lexicon.is_escalation(e)) {
            UrgencyTier::Medium
        } else {
            UrgencyTier::Low
        };

        debug!(
            entities = entities.len(),
            red_flags = red_flags.len(),
            urgency = %urgency,
            "Classified patient text"
        );

        Classification {
            entities,
            red_flags,
            urgency,
        }
    }
}
