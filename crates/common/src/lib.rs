//! Common types and traits shared across Caduceus crates.
//!
//! This crate provides the foundational abstractions that the triage
//! engine, the stage agents, and the API gateway use to communicate.

pub mod classification;
pub mod error;
pub mod message;
pub mod traits;

pub use classification::{Classification, UrgencyTier};
pub use error::{CaduceusError, Result};
pub use message::{MessageRole, PatientMessage};
pub use traits::{Agent, AgentCapability, AgentConfig, TriageRequest};
