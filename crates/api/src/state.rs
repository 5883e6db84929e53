//! Application state for the API server.

use caduceus_agents::{EmergencyAgent, SpecialistAgent};
use caduceus_common::Agent;
use caduceus_triage::{Classifier, TriageConfig, TriageFlow};
use std::sync::Arc;

/// Shared application state for the API server.
///
/// The flow and classifier are stateless, so no locking is needed:
/// concurrent requests share them freely.
pub struct AppState {
    /// The triage flow with both stage agents wired in
    pub flow: TriageFlow,

    /// Server start time (for health checks)
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state from the given triage configuration.
    pub fn new(config: TriageConfig) -> caduceus_common::Result<Self> {
        let lexicon = config.build_lexicon()?;
        let mut flow = TriageFlow::new(Classifier::new(lexicon));

        flow.set_emergency_agent(
            Arc::new(EmergencyAgent::with_default_config()) as Arc<dyn Agent>
        );
        flow.set_specialist_agent(
            Arc::new(SpecialistAgent::with_default_config()) as Arc<dyn Agent>
        );

        Ok(Self {
            flow,
            start_time: std::time::Instant::now(),
        })
    }

    /// Get the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
