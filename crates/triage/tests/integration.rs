//! Integration tests for the classify → route → flow pipeline.
//!
//! These tests wire in the real stage agents; everything is deterministic
//! keyword matching, so no external services are needed.

use caduceus_agents::{EmergencyAgent, SpecialistAgent};
use caduceus_common::{Agent, PatientMessage, UrgencyTier};
use caduceus_triage::{Classifier, Stage, TriageFlow};
use std::sync::Arc;

/// Helper to create a flow with both stage agents wired in.
fn create_test_flow() -> TriageFlow {
    let mut flow = TriageFlow::new(Classifier::default());
    flow.set_emergency_agent(Arc::new(EmergencyAgent::with_default_config()) as Arc<dyn Agent>);
    flow.set_specialist_agent(Arc::new(SpecialistAgent::with_default_config()) as Arc<dyn Agent>);
    flow
}

// ============================================================================
// Classification through the flow
// ============================================================================

#[tokio::test]
async fn test_low_urgency_case() {
    let flow = create_test_flow();
    let msg = PatientMessage::patient("I have a cough and fever");
    let outcome = flow.run(&msg).await.unwrap();

    assert_eq!(outcome.classification.entities, vec!["cough", "fever"]);
    assert!(outcome.classification.red_flags.is_empty());
    assert_eq!(outcome.classification.urgency, UrgencyTier::Low);
    assert_eq!(outcome.decision.stage, Stage::Specialist);
}

#[tokio::test]
async fn test_medium_urgency_case() {
    let flow = create_test_flow();
    let msg = PatientMessage::patient("severe dizziness and pain");
    let outcome = flow.run(&msg).await.unwrap();

    assert_eq!(outcome.classification.urgency, UrgencyTier::Medium);
    assert_eq!(outcome.decision.stage, Stage::Specialist);
}

#[tokio::test]
async fn test_high_urgency_case_visits_emergency() {
    let flow = create_test_flow();
    let msg = PatientMessage::patient("crushing chest pain and blue lips");
    let outcome = flow.run(&msg).await.unwrap();

    assert_eq!(outcome.classification.urgency, UrgencyTier::High);
    assert_eq!(outcome.decision.stage, Stage::Emergency);

    // The emergency agent must run before the specialist agent
    let emergency = outcome
        .visited
        .iter()
        .find(|v| v.stage == Stage::Emergency)
        .unwrap();
    assert_eq!(emergency.agent.as_deref(), Some("emergency-triage"));
    let output = emergency.output.as_ref().unwrap();
    assert_eq!(output.metadata["verdict"], "escalate");
}

// ============================================================================
// Stage traversal guarantees
// ============================================================================

#[tokio::test]
async fn test_stages_traversed_forward_without_repeats() {
    let flow = create_test_flow();
    for text in ["", "hello", "worst headache", "wheeze"] {
        let msg = PatientMessage::patient(text);
        let outcome = flow.run(&msg).await.unwrap();

        let stages: Vec<Stage> = outcome.visited.iter().map(|v| v.stage).collect();
        assert_eq!(
            stages,
            vec![Stage::Intake, Stage::Emergency, Stage::Specialist, Stage::Done],
            "unexpected traversal for input {text:?}"
        );
    }
}

#[tokio::test]
async fn test_emergency_agent_skipped_below_high_urgency() {
    let flow = create_test_flow();
    let msg = PatientMessage::patient("just a mild cough");
    let outcome = flow.run(&msg).await.unwrap();

    let emergency = outcome
        .visited
        .iter()
        .find(|v| v.stage == Stage::Emergency)
        .unwrap();
    assert!(emergency.agent.is_none());
    assert!(emergency.output.is_none());
}

// ============================================================================
// Final response
// ============================================================================

#[tokio::test]
async fn test_response_comes_from_specialist() {
    let flow = create_test_flow();
    let msg = PatientMessage::patient("I have a cough");
    let outcome = flow.run(&msg).await.unwrap();

    assert_eq!(outcome.response.source_agent.as_deref(), Some("specialist-routing"));
    assert!(outcome.response.content.contains("pulmonology"));
}

#[tokio::test]
async fn test_empty_input_still_completes() {
    let flow = create_test_flow();
    let msg = PatientMessage::patient("");
    let outcome = flow.run(&msg).await.unwrap();

    assert_eq!(outcome.classification.urgency, UrgencyTier::Low);
    assert!(!outcome.response.content.is_empty());
}

// ============================================================================
// Graceful degradation
// ============================================================================

#[tokio::test]
async fn test_missing_agents_graceful() {
    let flow = TriageFlow::new(Classifier::default());
    // No agents wired - should get a helpful message, not a crash
    let msg = PatientMessage::patient("dizziness and pain");
    let outcome = flow.run(&msg).await.unwrap();

    assert!(
        outcome.response.content.contains("contact the clinic"),
        "Expected graceful fallback message, got: {}",
        outcome.response.content
    );
}
