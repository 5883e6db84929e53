//! Error types for Caduceus.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaduceusError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Triage error: {0}")]
    Triage(String),

    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CaduceusError>;
