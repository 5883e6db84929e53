//! REST API gateway for Caduceus.
//!
//! This crate maps inbound HTTP requests onto the triage flow and the
//! auxiliary clinic services, and serializes their results back out.
//!
//! # Endpoints
//!
//! ## Core
//! - `GET /health` - Health check
//! - `POST /api/v1/triage` - Run a patient message through the full flow
//! - `POST /api/v1/symptoms/analyze` - Classification only
//!
//! ## Clinic services
//! - `GET /api/v1/drugs/interactions?drugs=a,b` - Pairwise interaction listing
//! - `GET /api/v1/kb/search?q=...` - Knowledge-base search
//! - `POST /api/v1/schedule/appointments` - Book an appointment (201)
//! - `POST /api/v1/conversation/summary` - Summarize a conversation
//! - `POST /api/v1/conversation/clear` - Clear a conversation
//!
//! # Architecture
//!
//! ```text
//! Client
//!    │
//!    ▼
//! ┌─────────────────┐
//! │   API Gateway   │ ◄── This crate
//! │     (Axum)      │
//! └────────┬────────┘
//!          │
//!          ├──────────────────┬──────────────────┐
//!          ▼                  ▼                  ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │   Triage Flow   │ │  Stage Agents   │ │ Clinic Services │
//! │  (classify +    │ │ (emergency /    │ │ (drugs, kb,     │
//! │   route)        │ │  specialist)    │ │  scheduling)    │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//! ```

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use state::AppState;

/// Create the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(routes::health))
        // API v1 - Triage
        .route("/api/v1/triage", post(routes::run_triage))
        .route("/api/v1/symptoms/analyze", post(routes::analyze_symptoms))
        // API v1 - Clinic services
        .route("/api/v1/drugs/interactions", get(routes::drug_interactions))
        .route("/api/v1/kb/search", get(routes::kb_search))
        .route(
            "/api/v1/schedule/appointments",
            post(routes::schedule_appointment),
        )
        .route(
            "/api/v1/conversation/summary",
            post(routes::conversation_summary),
        )
        .route(
            "/api/v1/conversation/clear",
            post(routes::conversation_clear),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the API server on the given address.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let router = create_router(state);

    info!(%addr, "Starting Caduceus API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
