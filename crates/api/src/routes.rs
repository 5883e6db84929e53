//! HTTP route handlers for the API.

use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use caduceus_common::{CaduceusError, Classification, PatientMessage, UrgencyTier};
use caduceus_services::{conversation, drugs, kb, scheduler};
use caduceus_triage::Stage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

/// Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    #[serde(skip)]
    status: StatusCode,
}

impl ErrorResponse {
    fn from_error(err: &CaduceusError, code: &'static str) -> Self {
        let status = match err {
            CaduceusError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let code = match err {
            CaduceusError::InvalidInput(_) => "INVALID_INPUT",
            _ => code,
        };
        Self {
            error: err.to_string(),
            code,
            status,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Triage request body.
#[derive(Debug, Deserialize)]
pub struct TriageRequestBody {
    pub text: String,
}

/// One stage the flow passed through, for the response payload.
#[derive(Debug, Serialize)]
pub struct StageEntry {
    pub stage: Stage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
}

/// Triage response body.
#[derive(Debug, Serialize)]
pub struct TriageResponse {
    pub id: String,
    pub urgency: UrgencyTier,
    pub entities: Vec<String>,
    pub red_flags: Vec<String>,
    pub routed_to: Stage,
    pub reasoning: String,
    pub visited: Vec<StageEntry>,
    pub response: String,
}

/// Run a patient message through the full triage flow.
pub async fn run_triage(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TriageRequestBody>,
) -> Result<Json<TriageResponse>, ErrorResponse> {
    info!(
        content_preview = %request.text.chars().take(50).collect::<String>(),
        "Received triage request"
    );

    let message = PatientMessage::patient(&request.text);
    let outcome = state.flow.run(&message).await.map_err(|e| {
        error!(error = %e, "Triage flow failed");
        ErrorResponse::from_error(&e, "TRIAGE_ERROR")
    })?;

    Ok(Json(TriageResponse {
        id: message.id,
        urgency: outcome.classification.urgency,
        entities: outcome.classification.entities,
        red_flags: outcome.classification.red_flags,
        routed_to: outcome.decision.stage,
        reasoning: outcome.decision.reasoning,
        visited: outcome
            .visited
            .into_iter()
            .map(|v| StageEntry {
                stage: v.stage,
                agent: v.agent,
            })
            .collect(),
        response: outcome.response.content,
    }))
}

/// Symptom analysis request body.
#[derive(Debug, Deserialize)]
pub struct SymptomRequest {
    pub text: String,
}

/// Symptom analysis response body.
#[derive(Debug, Serialize)]
pub struct SymptomResponse {
    pub entities: Vec<String>,
    pub urgency: UrgencyTier,
    pub red_flags: Vec<String>,
}

impl From<Classification> for SymptomResponse {
    fn from(c: Classification) -> Self {
        Self {
            entities: c.entities,
            urgency: c.urgency,
            red_flags: c.red_flags,
        }
    }
}

/// Classify patient text without running the flow.
pub async fn analyze_symptoms(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SymptomRequest>,
) -> Json<SymptomResponse> {
    let classification = state.flow.classifier().classify(&request.text);
    Json(classification.into())
}

/// Query parameters for the drug interaction endpoint. `drugs` is a
/// comma-separated list of drug names.
#[derive(Debug, Deserialize)]
pub struct DrugsQuery {
    pub drugs: String,
}

/// List pairwise interactions for the queried drugs.
pub async fn drug_interactions(Query(query): Query<DrugsQuery>) -> Json<drugs::InteractionReport> {
    let names: Vec<String> = query
        .drugs
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    Json(drugs::check_interactions(&names))
}

/// Query parameters for knowledge-base search.
#[derive(Debug, Deserialize)]
pub struct KbQuery {
    pub q: String,
}

/// Search the curated knowledge base.
pub async fn kb_search(Query(query): Query<KbQuery>) -> Json<kb::KbResponse> {
    Json(kb::search(&query.q))
}

/// Book an appointment.
pub async fn schedule_appointment(
    Json(request): Json<scheduler::AppointmentRequest>,
) -> (StatusCode, Json<scheduler::AppointmentConfirmation>) {
    (StatusCode::CREATED, Json(scheduler::book(request)))
}

/// Conversation summary request body.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub conversation: String,
}

/// Conversation summary response body.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Summarize a conversation transcript.
pub async fn conversation_summary(Json(request): Json<SummaryRequest>) -> Json<SummaryResponse> {
    Json(SummaryResponse {
        summary: conversation::summarize(&request.conversation),
    })
}

/// Conversation clear request body.
#[derive(Debug, Deserialize)]
pub struct ClearRequest {
    pub conversation_id: String,
}

/// Clear a conversation. There is no stored state, so this only
/// acknowledges the request.
pub async fn conversation_clear(Json(request): Json<ClearRequest>) -> Json<serde_json::Value> {
    info!(conversation_id = %request.conversation_id, "Conversation cleared");
    Json(serde_json::json!({ "status": "cleared" }))
}
