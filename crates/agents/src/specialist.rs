//! Specialist agent - routes cases to a medical specialty and composes
//! the patient-facing final answer.

use async_trait::async_trait;
use caduceus_common::{
    Agent, AgentCapability, AgentConfig, CaduceusError, Classification, PatientMessage, Result,
    TriageRequest, UrgencyTier,
};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

const SPECIALIST_SYSTEM_PROMPT: &str = r#"You are a medical care coordinator. Your role is to:

1. Review the symptoms the triage engine extracted from the patient's message
2. Choose the most appropriate specialty for follow-up care
3. Compose a clear, empathetic answer for the patient
4. Remind the patient this is guidance, not a diagnosis

Keep answers short and concrete.
Always tell the patient which specialty to book with and why.
"#;

/// Medical specialty a case can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specialty {
    Pulmonology,
    Neurology,
    GeneralMedicine,
    PrimaryCare,
}

impl Specialty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Pulmonology => "pulmonology",
            Specialty::Neurology => "neurology",
            Specialty::GeneralMedicine => "general medicine",
            Specialty::PrimaryCare => "primary care",
        }
    }

    /// Pick a specialty from the matched entities. Respiratory terms win
    /// over neurological ones, which win over generic pain and fever; a
    /// case with no matched entities goes to primary care.
    pub fn for_classification(classification: &Classification) -> Self {
        let has = |term: &str| classification.entities.iter().any(|e| e == term);

        if has("cough") || has("wheeze") {
            Specialty::Pulmonology
        } else if has("dizziness") {
            Specialty::Neurology
        } else if has("pain") || has("fever") {
            Specialty::GeneralMedicine
        } else {
            Specialty::PrimaryCare
        }
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Specialist routing agent invoked at the Specialist stage.
pub struct SpecialistAgent {
    config: AgentConfig,
    busy: AtomicBool,
}

impl SpecialistAgent {
    pub fn new(config: AgentConfig) -> Self {
        Self {
            config,
            busy: AtomicBool::new(false),
        }
    }

    pub fn with_default_config() -> Self {
        Self::new(AgentConfig {
            id: "specialist-routing".into(),
            name: "Specialist Routing Agent".into(),
            ..Default::default()
        })
    }

    fn compose_answer(request: &TriageRequest) -> String {
        let classification = &request.classification;
        let specialty = Specialty::for_classification(classification);

        let mut answer = if classification.entities.is_empty() {
            format!(
                "We couldn't match your description to a specific symptom. \
                 We recommend a {specialty} appointment to discuss it further."
            )
        } else {
            format!(
                "Based on your symptoms ({}), we recommend booking a {specialty} appointment.",
                classification.entities.join(", ")
            )
        };

        match classification.urgency {
            UrgencyTier::High => {
                answer.push_str(
                    " Given the urgency of your case, please seek emergency care first; \
                     the specialist follow-up can happen afterwards.",
                );
            }
            UrgencyTier::Medium => {
                answer.push_str(" Please try to book within the next few days.");
            }
            UrgencyTier::Low => {
                answer.push_str(" A routine appointment is fine.");
            }
        }

        answer.push_str(" This is guidance, not a diagnosis.");
        answer
    }
}

#[async_trait]
impl Agent for SpecialistAgent {
    fn id(&self) -> &str {
        &self.config.id
    }

    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &[AgentCapability] {
        &[
            AgentCapability::SpecialtyRouting,
            AgentCapability::PatientCommunication,
        ]
    }

    async fn process(&self, request: &TriageRequest) -> Result<PatientMessage> {
        info!(agent = %self.id(), "Routing to specialist");

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

        let specialty = Specialty::for_classification(&request.classification);
        let mut message = PatientMessage::from_agent(self.id(), Self::compose_answer(request));
        message.metadata = serde_json::json!({ "specialty": specialty.as_str() });

        self.busy.store(false, Ordering::SeqCst);
        Ok(message)
    }

    fn system_prompt(&self) -> &str {
        self.config
            .system_prompt
            .as_deref()
            .unwrap_or(SPECIALIST_SYSTEM_PROMPT)
    }

    fn is_available(&self) -> bool {
        !self.busy.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(entities: Vec<&str>, urgency: UrgencyTier) -> Classification {
        Classification {
            entities: entities.into_iter().map(String::from).collect(),
            red_flags: vec![],
            urgency,
        }
    }

    #[test]
    fn test_respiratory_terms_go_to_pulmonology() {
        let c = classification(vec!["cough", "fever"], UrgencyTier::Low);
        assert_eq!(Specialty::for_classification(&c), Specialty::Pulmonology);
    }

    #[test]
    fn test_dizziness_goes_to_neurology() {
        let c = classification(vec!["dizziness"], UrgencyTier::Medium);
        assert_eq!(Specialty::for_classification(&c), Specialty::Neurology);
    }

    #[test]
    fn test_no_entities_go_to_primary_care() {
        let c = classification(vec![], UrgencyTier::Low);
        assert_eq!(Specialty::for_classification(&c), Specialty::PrimaryCare);
    }

    #[tokio::test]
    async fn test_answer_names_symptoms_and_specialty() {
        let agent = SpecialistAgent::with_default_config();
        let req = TriageRequest::new(
            "I have a cough and fever",
            classification(vec!["cough", "fever"], UrgencyTier::Low),
        );
        let msg = agent.process(&req).await.unwrap();

        assert!(msg.content.contains("cough, fever"));
        assert!(msg.content.contains("pulmonology"));
        assert_eq!(msg.metadata["specialty"], "pulmonology");
        assert!(agent.is_available());
    }

    #[tokio::test]
    async fn test_high_urgency_answer_defers_to_emergency_care() {
        let agent = SpecialistAgent::with_default_config();
        let req = TriageRequest::new(
            "crushing chest pain",
            Classification {
                entities: vec!["pain".into()],
                red_flags: vec!["crushing chest pain".into()],
                urgency: UrgencyTier::High,
            },
        );
        let msg = agent.process(&req).await.unwrap();
        assert!(msg.content.contains("emergency care"));
    }
}
