//! Availability HTTP server binary.
//!
//! Loads the weekly schedule once at startup and serves availability
//! queries over HTTP.
//!
//! # Environment Variables
//!
//! - `HOST`: server host (default: 0.0.0.0)
//! - `PORT`: server port (default: 3000)
//! - `OPENHOURS_SCHEDULE`: path to the schedule JSON document
//!   (default: Availability.json)
//! - `RUST_LOG`: log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use openhours_server::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting openhours server");

    // Load the schedule once; it stays immutable for the process lifetime.
    let schedule_path =
        env::var("OPENHOURS_SCHEDULE").unwrap_or_else(|_| "Availability.json".to_string());
    let schedule = openhours_core::load_schedule(&schedule_path)
        .with_context(|| format!("failed to load schedule from {schedule_path}"))?;
    info!(path = %schedule_path, "Schedule loaded");

    let state = AppState::new(Arc::new(schedule));
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
