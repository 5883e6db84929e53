//! Auxiliary clinic services for Caduceus.
//!
//! Each service is a stateless function over its request: pairwise drug
//! interaction listing, curated knowledge-base search, an appointment
//! booking stub, and conversation summaries. The API gateway exposes them
//! next to the triage flow.

pub mod conversation;
pub mod drugs;
pub mod kb;
pub mod scheduler;

pub use conversation::{summarize, SUMMARY_LIMIT};
pub use drugs::{check_interactions, Interaction, InteractionReport, Severity};
pub use kb::{list_documents, search, KbResponse, KbResult};
pub use scheduler::{book, AppointmentConfirmation, AppointmentRequest};
