//! Core agent traits and capabilities.
//!
//! These traits are defined in `caduceus-common` so that both the triage
//! flow and the agent implementations can reference them without circular
//! dependencies.

use crate::{Classification, PatientMessage, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Capabilities that a stage agent can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentCapability {
    /// Can screen requests for emergency indicators
    EmergencyScreening,
    /// Can route a case to the right medical specialty
    SpecialtyRouting,
    /// Can analyze free-text symptom descriptions
    SymptomAnalysis,
    /// Can compose patient-facing answers
    PatientCommunication,
    /// Can book appointments
    Scheduling,
}

/// The request handed to a stage agent: the patient's text plus the
/// classification the triage engine derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageRequest {
    /// Raw patient text
    pub text: String,

    /// Classification derived from the text
    pub classification: Classification,
}

impl TriageRequest {
    pub fn new(text: impl Into<String>, classification: Classification) -> Self {
        Self {
            text: text.into(),
            classification,
        }
    }
}

/// The core trait that all stage agents implement.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Get the agent's unique identifier.
    fn id(&self) -> &str;

    /// Get the agent's human-readable name.
    fn name(&self) -> &str;

    /// Get the agent's capabilities.
    fn capabilities(&self) -> &[AgentCapability];

    /// Check if the agent has a specific capability.
    fn has_capability(&self, cap: AgentCapability) -> bool {
        self.capabilities().contains(&cap)
    }

    /// Process a triage request at this agent's stage.
    async fn process(&self, request: &TriageRequest) -> Result<PatientMessage>;

    /// Get the agent's system prompt.
    fn system_prompt(&self) -> &str;

    /// Check if the agent is available (not busy with another request).
    fn is_available(&self) -> bool;
}

/// Configuration for agent creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Agent ID
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Custom system prompt (optional, uses the agent's default if not set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            id: "agent".into(),
            name: "Agent".into(),
            system_prompt: None,
        }
    }
}
