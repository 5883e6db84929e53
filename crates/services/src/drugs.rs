//! Drug interaction listing.
//!
//! Lists every unordered pair of the supplied drugs with a fixed moderate
//! severity and a clinician-guidance note. This is a demonstration stub,
//! not a real interaction database.

use serde::{Deserialize, Serialize};

/// Interaction severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Moderate,
    Major,
}

/// A potential interaction between two drugs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// The drug pair, e.g. `"warfarin + aspirin"`
    pub pair: String,

    /// Interaction severity
    pub severity: Severity,

    /// Guidance note for the patient
    pub note: String,
}

/// The full interaction report for a list of drugs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionReport {
    pub interactions: Vec<Interaction>,
}

/// List every unordered pair of the given drugs as a moderate interaction.
///
/// Zero or one drug yields an empty report. Drug names are taken as
/// given; duplicates produce their own pairs.
pub fn check_interactions(drugs: &[String]) -> InteractionReport {
    let mut interactions = Vec::new();

    for i in 0..drugs.len() {
        for j in (i + 1)..drugs.len() {
            interactions.push(Interaction {
                pair: format!("{} + {}", drugs[i], drugs[j]),
                severity: Severity::Moderate,
                note: "Check clinician guidance.".to_string(),
            });
        }
    }

    InteractionReport { interactions }
}
