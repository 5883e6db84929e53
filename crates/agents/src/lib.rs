//! Stage agents for the Caduceus triage flow.
//!
//! This crate provides the agents invoked at each stage of the flow:
//!
//! - **Emergency Agent**: screens high-urgency cases for emergency
//!   indicators and produces a pass/escalate verdict
//! - **Specialist Agent**: maps matched symptoms to a medical specialty
//!   and composes the patient-facing final answer
//!
//! ```text
//!  Intake ──► Emergency ──► Specialist ──► Done
//!                 │              │
//!                 ▼              ▼
//!          EmergencyAgent  SpecialistAgent
//!          (screening)     (final answer)
//! ```
//!
//! Agents are deterministic: they work entirely from the classification
//! the triage engine attaches to each request.

pub mod emergency;
pub mod specialist;

pub use emergency::{EmergencyAgent, ScreeningVerdict};
pub use specialist::{Specialty, SpecialistAgent};
