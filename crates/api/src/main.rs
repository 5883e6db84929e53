//! Caduceus API server binary.
//!
//! Usage:
//!   caduceus-api --config triage.toml
//!   caduceus-api --port 8080
//!   caduceus-api --port 8080 --bind 0.0.0.0
//!
//! # Environment Variables
//!
//! - `CADUCEUS_BIND_ADDR` - Server bind address (default: 127.0.0.1)
//! - `RUST_LOG` - Log filter (default: info)

use caduceus_api::{serve, AppState};
use caduceus_triage::TriageConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,caduceus_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments (simple for now)
    let args: Vec<String> = std::env::args().collect();
    let mut port: u16 = 8080;
    let mut config_path: Option<String> = None;
    let mut bind_addr: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    port = args[i + 1].parse().expect("Invalid port number");
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--bind" | "-b" => {
                if i + 1 < args.len() {
                    bind_addr = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Caduceus API Server");
                println!();
                println!("Usage: caduceus-api [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --port <PORT>        Port to listen on (default: 8080)");
                println!(
                    "  -b, --bind <ADDR>        Bind address (default: 127.0.0.1, env: CADUCEUS_BIND_ADDR)"
                );
                println!("  -c, --config <FILE>      Path to triage.toml file");
                println!("  -h, --help               Show this help message");
                println!();
                println!("Environment variables:");
                println!("  CADUCEUS_BIND_ADDR       Server bind address (overridden by --bind flag)");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    // Determine bind address (CLI flag > env var > default 127.0.0.1)
    let host = bind_addr
        .or_else(|| std::env::var("CADUCEUS_BIND_ADDR").ok())
        .unwrap_or_else(|| "127.0.0.1".to_string());

    if host == "0.0.0.0" {
        tracing::warn!(
            "Server binding to 0.0.0.0 — this exposes the API to all network interfaces. \
             Ensure a firewall is in place; the API has no authentication."
        );
    }

    // Load triage configuration
    let config = if let Some(path) = config_path {
        tracing::info!(path = %path, "Loading configuration");
        TriageConfig::from_file(&path)?
    } else {
        tracing::info!("Using default configuration");
        TriageConfig::default()
    };

    // Create application state and start the server
    let state = AppState::new(config)?;
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    serve(Arc::new(state), addr).await?;

    Ok(())
}
