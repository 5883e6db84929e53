//! Configuration for the triage engine.
//!
//! The lexicon term lists, including the escalation subset, are plain
//! configuration data rather than derived logic, so deployments can tune
//! them without code changes.

use crate::lexicon::{
    Lexicon, DEFAULT_ESCALATION_TERMS, DEFAULT_RED_FLAG_TERMS, DEFAULT_SYMPTOM_TERMS,
};
use caduceus_common::Result;
use serde::{Deserialize, Serialize};

/// Main triage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Lexicon term lists
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

/// Term lists driving classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Symptom terms matched as entities
    #[serde(default = "default_symptom_terms")]
    pub symptom_terms: Vec<String>,

    /// Red-flag terms; any match forces high urgency
    #[serde(default = "default_red_flag_terms")]
    pub red_flag_terms: Vec<String>,

    /// Pain/instability subset of the symptom terms; any match raises
    /// urgency to medium
    #[serde(default = "default_escalation_terms")]
    pub escalation_terms: Vec<String>,
}

fn default_symptom_terms() -> Vec<String> {
    DEFAULT_SYMPTOM_TERMS.iter().map(|s| s.to_string()).collect()
}

fn default_red_flag_terms() -> Vec<String> {
    DEFAULT_RED_FLAG_TERMS.iter().map(|s| s.to_string()).collect()
}

fn default_escalation_terms() -> Vec<String> {
    DEFAULT_ESCALATION_TERMS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            symptom_terms: default_symptom_terms(),
            red_flag_terms: default_red_flag_terms(),
            escalation_terms: default_escalation_terms(),
        }
    }
}

impl TriageConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Build the validated lexicon from the configured term lists.
    pub fn build_lexicon(&self) -> Result<Lexicon> {
        Lexicon::new(
            self.lexicon.symptom_terms.clone(),
            self.lexicon.red_flag_terms.clone(),
            self.lexicon.escalation_terms.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_default_lexicon() {
        let config = TriageConfig::default();
        let lexicon = config.build_lexicon().unwrap();
        assert_eq!(lexicon.symptom_terms().len(), 5);
        assert_eq!(lexicon.escalation_terms(), &["pain", "dizziness"]);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: TriageConfig = toml::from_str(
            r#"
            [lexicon]
            symptom_terms = ["cough", "rash", "pain"]
            "#,
        )
        .unwrap();

        assert_eq!(config.lexicon.symptom_terms, vec!["cough", "rash", "pain"]);
        // unspecified lists keep their defaults
        assert_eq!(config.lexicon.red_flag_terms.len(), 4);
        config.build_lexicon().unwrap();
    }

    #[test]
    fn test_invalid_escalation_subset_rejected_at_build() {
        let config: TriageConfig = toml::from_str(
            r#"
            [lexicon]
            symptom_terms = ["cough"]
            escalation_terms = ["dizziness"]
            "#,
        )
        .unwrap();

        assert!(config.build_lexicon().is_err());
    }

    #[test]
    fn test_from_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triage.toml");
        std::fs::write(
            &path,
            r#"
            [lexicon]
            red_flag_terms = ["blue lips", "worst headache"]
            "#,
        )
        .unwrap();

        let config = TriageConfig::from_file(&path).unwrap();
        assert_eq!(
            config.lexicon.red_flag_terms,
            vec!["blue lips", "worst headache"]
        );
    }
}
