//! Knowledge-base ingestion binary.
//!
//! Usage:
//!   kb-ingest [SOURCES_DIR]
//!
//! # Environment Variables
//!
//! - `KB_ENDPOINT` - Knowledge-base endpoint (default: http://localhost:8080)
//! - `KB_INDEX_NAME` - Target index name (default: medical-kb)
//!
//! Lists the documents under the sources directory that would be ingested
//! into the knowledge base. There is no real indexing backend; this
//! reports what an ingestion run would cover.

use caduceus_services::kb;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let sources_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("knowledge_base/sources"));

    let kb_endpoint =
        std::env::var("KB_ENDPOINT").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let index_name = std::env::var("KB_INDEX_NAME").unwrap_or_else(|_| "medical-kb".to_string());

    let docs = kb::list_documents(&sources_dir)?;

    info!(
        count = docs.len(),
        endpoint = %kb_endpoint,
        index = %index_name,
        "Ingest {} documents into {}/{}",
        docs.len(),
        kb_endpoint,
        index_name
    );

    for doc in docs.iter().take(10) {
        info!(" - {}", doc.display());
    }

    Ok(())
}
