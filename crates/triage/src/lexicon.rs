//! Static term lexicon driving symptom classification.
//!
//! Terms belong to exactly one of two disjoint sets: symptom terms and
//! red-flag terms. A third list, the escalation subset, names the symptom
//! terms whose presence alone raises urgency to medium. All three are
//! loaded once at startup and read-only afterwards.

use caduceus_common::{CaduceusError, Result};

/// Default symptom terms recognized by the classifier.
pub const DEFAULT_SYMPTOM_TERMS: &[&str] = &["cough", "fever", "pain", "wheeze", "dizziness"];

/// Default red-flag terms. Presence of any one forces high urgency.
pub const DEFAULT_RED_FLAG_TERMS: &[&str] = &[
    "crushing chest pain",
    "blue lips",
    "confusion",
    "worst headache",
];

/// Default escalation (pain/instability) subset of the symptom terms.
pub const DEFAULT_ESCALATION_TERMS: &[&str] = &["pain", "dizziness"];

/// Category of a recognized term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermCategory {
    Symptom,
    RedFlag,
}

/// The term-to-category mapping used for classification.
///
/// Terms are stored lowercase; matching is case-insensitive substring
/// containment against the input text.
#[derive(Debug, Clone)]
pub struct Lexicon {
    symptoms: Vec<String>,
    red_flags: Vec<String>,
    escalation: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon from explicit term lists.
    ///
    /// Validates that the symptom and red-flag sets are disjoint and that
    /// every escalation term is one of the symptom terms.
    pub fn new(
        symptoms: Vec<String>,
        red_flags: Vec<String>,
        escalation: Vec<String>,
    ) -> Result<Self> {
        let symptoms = normalize(symptoms);
        let red_flags = normalize(red_flags);
        let escalation = normalize(escalation);

        if let Some(term) = symptoms.iter().find(|t| red_flags.contains(*t)) {
            return Err(CaduceusError::Config(format!(
                "term '{term}' appears in both the symptom and red-flag sets"
            )));
        }

        if let Some(term) = escalation.iter().find(|t| !symptoms.contains(*t)) {
            return Err(CaduceusError::Config(format!(
                "escalation term '{term}' is not a symptom term"
            )));
        }

        Ok(Self {
            symptoms,
            red_flags,
            escalation,
        })
    }

    /// Look up the category of a single term. Absence of a match is a
    /// normal outcome, not an error.
    pub fn lookup(&self, term: &str) -> Option<TermCategory> {
        let lowered = term.to_lowercase();
        if self.symptoms.contains(&lowered) {
            Some(TermCategory::Symptom)
        } else if self.red_flags.contains(&lowered) {
            Some(TermCategory::RedFlag)
        } else {
            None
        }
    }

    /// Symptom terms contained in the already-lowercased text, in lexicon
    /// order.
    pub fn symptom_matches(&self, lowered_text: &str) -> Vec<String> {
        self.symptoms
            .iter()
            .filter(|t| lowered_text.contains(t.as_str()))
            .cloned()
            .collect()
    }

    /// Red-flag terms contained in the already-lowercased text, in lexicon
    /// order.
    pub fn red_flag_matches(&self, lowered_text: &str) -> Vec<String> {
        self.red_flags
            .iter()
            .filter(|t| lowered_text.contains(t.as_str()))
            .cloned()
            .collect()
    }

    /// Whether a matched symptom term belongs to the escalation subset.
    pub fn is_escalation(&self, term: &str) -> bool {
        self.escalation.iter().any(|t| t == term)
    }

    pub fn symptom_terms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn red_flag_terms(&self) -> &[String] {
        &self.red_flags
    }

    pub fn escalation_terms(&self) -> &[String] {
        &self.escalation
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(
            DEFAULT_SYMPTOM_TERMS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_RED_FLAG_TERMS.iter().map(|s| s.to_string()).collect(),
            DEFAULT_ESCALATION_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .expect("default lexicon is valid")
    }
}

/// Lowercase, trim, and drop empty entries while preserving order.
fn normalize(terms: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(terms.len());
    for term in terms {
        let lowered = term.trim().to_lowercase();
        if !lowered.is_empty() && !out.contains(&lowered) {
            out.push(lowered);
        }
    }
    out
}
