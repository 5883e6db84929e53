//! Message types exchanged between the patient, the flow, and stage agents.

use serde::{Deserialize, Serialize};

/// Role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    Patient,
    Assistant,
    System,
}

/// A message passed between the patient and the triage flow, or produced
/// by a stage agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientMessage {
    /// Unique message ID
    pub id: String,

    /// Role of the sender
    pub role: MessageRole,

    /// Message content
    pub content: String,

    /// Source agent (if produced by an agent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_agent: Option<String>,

    /// Timestamp (Unix millis)
    pub timestamp: u64,

    /// Optional metadata
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub metadata: serde_json::Value,
}

impl PatientMessage {
    pub fn patient(content: impl Into<String>) -> Self {
        Self {
            id: message_id(),
            role: MessageRole::Patient,
            content: content.into(),
            source_agent: None,
            timestamp: now_millis(),
            metadata: serde_json::Value::Null,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            id: message_id(),
            role: MessageRole::System,
            content: content.into(),
            source_agent: None,
            timestamp: now_millis(),
            metadata: serde_json::Value::Null,
        }
    }

    pub fn from_agent(agent: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: message_id(),
            role: MessageRole::Assistant,
            content: content.into(),
            source_agent: Some(agent.into()),
            timestamp: now_millis(),
            metadata: serde_json::Value::Null,
        }
    }
}

fn message_id() -> String {
    format!("msg_{}", uuid::Uuid::new_v4())
}

fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_millis() as u64
}
