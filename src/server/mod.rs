//! HTTP front end: upload form, HTML result page and JSON API

pub mod errors;
pub mod handlers;
pub mod pages;
pub mod state;

use crate::config::Config;
use crate::processing::MatchEngine;
use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/upload", post(handlers::upload_page))
        .route("/api/upload", post(handlers::api_upload))
        .route("/api/structured-resume", post(handlers::api_structured_resume))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C
pub async fn serve(config: Config, engine: MatchEngine) -> anyhow::Result<()> {
    let addr = config.bind_address();
    let state = AppState::new(engine, config);
    if let Err(e) = state.input.sweep_scratch_dir() {
        warn!("Could not clean the upload directory: {}", e);
    }

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
