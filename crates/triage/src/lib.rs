//! Triage engine for Caduceus.
//!
//! The engine turns free-text patient input into an urgency tier and a
//! routing decision, then drives the request through a fixed sequence of
//! stages:
//!
//! ```text
//! Patient text
//!      │
//!      ▼
//! ┌─────────────────┐
//! │   Classifier    │  ◄── Lexicon (symptom + red-flag terms)
//! └────────┬────────┘
//!          │ Classification
//!          ▼
//! ┌─────────────────┐
//! │     Router      │  High → Emergency, otherwise → Specialist
//! └────────┬────────┘
//!          │
//!          ▼
//!  Intake ──► Emergency ──► Specialist ──► Done
//! ```
//!
//! Classification and routing are pure functions with no shared mutable
//! state; the flow coordinator invokes external agents at the Emergency
//! and Specialist stages.

pub mod classify;
pub mod config;
pub mod flow;
pub mod lexicon;
pub mod routing;

pub use classify::Classifier;
pub use config::{LexiconConfig, TriageConfig};
pub use flow::{StageVisit, TriageFlow, TriageOutcome};
pub use lexicon::{Lexicon, TermCategory};
pub use routing::{route, RouteDecision, Stage};
