//! Emergency agent - screens cases for emergency indicators.

use async_trait::async_trait;
use caduceus_common::{
    Agent, AgentCapability, AgentConfig, CaduceusError, PatientMessage, Result, TriageRequest,
};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

const EMERGENCY_SYSTEM_PROMPT: &str = r#"You are an emergency triage screener for a medical clinic. Your role is to:

1. Review the patient's description and the detected red-flag indicators
2. Decide whether the case must escalate to emergency services
3. Give clear, calm instructions when escalation is needed
4. Pass non-emergency cases onward without alarming the patient

Never diagnose. Never downplay a red-flag indicator.
When in doubt, escalate.
"#;

/// Outcome of emergency screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningVerdict {
    /// No emergency indicators; the case continues to specialist routing
    Pass,
    /// Red-flag indicators present; direct the patient to emergency care
    Escalate,
}

impl ScreeningVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreeningVerdict::Pass => "pass",
            ScreeningVerdict::Escalate => "escalate",
        }
    }
}

/// Emergency screening agent invoked at the Emergency stage.
pub struct EmergencyAgent {
    config: AgentConfig,
    busy: AtomicBool,
}

impl EmergencyAgent {
    pub fn new(config: AgentConfig) -> Self {
        Self {
            config,
            busy: AtomicBool::new(false),
        }
    }

    pub fn with_default_config() -> Self {
        Self::new(AgentConfig {
            id: "emergency-triage".into(),
            name: "Emergency Triage Agent".into(),
            ..Default::default()
        })
    }

    /// Screen a classification: escalate when urgency is high.
    pub fn screen(request: &TriageRequest) -> ScreeningVerdict {
        if request.classification.requires_screening() {
            ScreeningVerdict::Escalate
        } else {
            ScreeningVerdict::Pass
        }
    }
}

#[async_trait]
impl Agent for EmergencyAgent {
    fn id(&self) -> &str {
        &self.config.id
    }

    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &[AgentCapability] {
        &[
            AgentCapability::EmergencyScreening,
            AgentCapability::PatientCommunication,
        ]
    }

    async fn process(&self, request: &TriageRequest) -> Result<PatientMessage> {
        info!(agent = %self.id(), "Screening for emergency indicators");

        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(CaduceusError::Agent(format!(
                "Agent {} is busy processing another request",
                self.id()
            )));
        }

        let verdict = Self::screen(request);
        let content = match verdict {
            ScreeningVerdict::Escalate => format!(
                "Emergency indicators detected: {}. \
                 Please call your local emergency number or go to the nearest \
                 emergency department now. Do not wait for an appointment.",
                request.classification.red_flags.join(", ")
            ),
            ScreeningVerdict::Pass => {
                "No emergency indicators found. Continuing to specialist routing.".to_string()
            }
        };

        let mut message = PatientMessage::from_agent(self.id(), content);
        message.metadata = serde_json::json!({ "verdict": verdict.as_str() });

        self.busy.store(false, Ordering::SeqCst);
        Ok(message)
    }

    fn system_prompt(&self) -> &str {
        self.config
            .system_prompt
            .as_deref()
            .unwrap_or(EMERGENCY_SYSTEM_PROMPT)
    }

    fn is_available(&self) -> bool {
        !self.busy.load(Ordering::SeqCst)
    }
}
