//! Per-request stage flow: Intake → Emergency → Specialist → Done.
//!
//! The flow classifies the patient text at intake, consults the router at
//! the emergency/specialist decision point, and invokes the configured
//! agent at each stage it passes through. Every stage is visited at most
//! once and traversal is strictly forward; the flow terminates when Done
//! is reached.

use crate::classify::Classifier;
use crate::routing::{RouteDecision, Stage};
use caduceus_common::{Agent, Classification, PatientMessage, Result, TriageRequest};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Record of one stage the flow passed through.
#[derive(Debug, Clone)]
pub struct StageVisit {
    /// The stage that was visited
    pub stage: Stage,

    /// ID of the agent invoked at this stage, if any
    pub agent: Option<String>,

    /// Output produced by the agent, if one ran
    pub output: Option<PatientMessage>,
}

impl StageVisit {
    fn passthrough(stage: Stage) -> Self {
        Self {
            stage,
            agent: None,
            output: None,
        }
    }
}

/// The result of running one request through the full flow.
#[derive(Debug, Clone)]
pub struct TriageOutcome {
    /// Classification derived at intake
    pub classification: Classification,

    /// The routing decision made after classification
    pub decision: RouteDecision,

    /// Stages visited, in traversal order
    pub visited: Vec<StageVisit>,

    /// The patient-facing final message
    pub response: PatientMessage,
}

/// Sequences stage execution for one request from Intake to Done.
///
/// The flow holds no per-request state; concurrent requests may run
/// through a shared flow without coordination.
pub struct TriageFlow {
    classifier: Classifier,
    emergency_agent: Option<Arc<dyn Agent>>,
    specialist_agent: Option<Arc<dyn Agent>>,
}

impl TriageFlow {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            emergency_agent: None,
            specialist_agent: None,
        }
    }

    /// Wire in the agent invoked at the Emergency stage.
    pub fn set_emergency_agent(&mut self, agent: Arc<dyn Agent>) {
        self.emergency_agent = Some(agent);
    }

    /// Wire in the agent invoked at the Specialist stage.
    pub fn set_specialist_agent(&mut self, agent: Arc<dyn Agent>) {
        self.specialist_agent = Some(agent);
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Run one patient message through the flow.
    ///
    /// The emergency agent is invoked only when the router demands
    /// screening (high urgency); the specialist agent runs for every
    /// request. Agent errors surface immediately and abort the traversal.
    pub async fn run(&self, message: &PatientMessage) -> Result<TriageOutcome> {
        info!(
            message_id = %message.id,
            content_preview = %message.content.chars().take(50).collect::<String>(),
            "Starting triage flow"
        );

        let classification = self.classifier.classify(&message.content);
        let decision = RouteDecision::decide(&classification);

        debug!(
            stage = %decision.stage,
            urgency = %classification.urgency,
            reasoning = %decision.reasoning,
            "Routing decision made"
        );

        let request = TriageRequest::new(&message.content, classification.clone());

        let mut visited = vec![StageVisit::passthrough(Stage::Intake)];
        let mut response: Option<PatientMessage> = None;

        let mut current = Stage::Intake;
        while let Some(stage) = current.next() {
            let visit = match stage {
                Stage::Emergency if decision.stage == Stage::Emergency => {
                    self.dispatch(stage, self.emergency_agent.as_deref(), &request)
                        .await?
                }
                Stage::Emergency => {
                    debug!("Emergency screening not required, passing through");
                    StageVisit::passthrough(stage)
                }
                Stage::Specialist => {
                    self.dispatch(stage, self.specialist_agent.as_deref(), &request)
                        .await?
                }
                Stage::Done => StageVisit::passthrough(stage),
                Stage::Intake => unreachable!("intake has no predecessor"),
            };

            if let Some(ref output) = visit.output {
                response = Some(output.clone());
            }
            visited.push(visit);
            current = stage;
        }

        let response = response.unwrap_or_else(|| {
            PatientMessage::system(
                "No agent was available to handle this request. \
                 Please contact the clinic directly.",
            )
        });

        info!(message_id = %message.id, stages = visited.len(), "Triage flow complete");

        Ok(TriageOutcome {
            classification,
            decision,
            visited,
            response,
        })
    }

    /// Invoke the agent for a stage, degrading gracefully when none is
    /// wired in.
    async fn dispatch(
        &self,
        stage: Stage,
        agent: Option<&dyn Agent>,
        request: &TriageRequest,
    ) -> Result<StageVisit> {
        let Some(agent) = agent else {
            warn!(stage = %stage, "No agent wired for stage");
            return Ok(StageVisit::passthrough(stage));
        };

        debug!(stage = %stage, agent = %agent.id(), "Dispatching to stage agent");
        let output = agent.process(request).await?;

        Ok(StageVisit {
            stage,
            agent: Some(agent.id().to_string()),
            output: Some(output),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_flow_without_agents_degrades_gracefully() {
        let flow = TriageFlow::new(Classifier::default());
        let msg = PatientMessage::patient("I have a cough");
        let outcome = flow.run(&msg).await.unwrap();

        assert!(!outcome.response.content.is_empty());
        assert_eq!(outcome.decision.stage, Stage::Specialist);
    }

    #[tokio::test]
    async fn test_flow_visits_every_stage_once_in_order() {
        let flow = TriageFlow::new(Classifier::default());
        let msg = PatientMessage::patient("crushing chest pain");
        let outcome = flow.run(&msg).await.unwrap();

        let stages: Vec<Stage> = outcome.visited.iter().map(|v| v.stage).collect();
        assert_eq!(
            stages,
            vec![Stage::Intake, Stage::Emergency, Stage::Specialist, Stage::Done]
        );
    }
}
