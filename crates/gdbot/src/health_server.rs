use anyhow::{Context, Result};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;

const ALIVE_MESSAGE: &str = "gdbot is alive";

pub(crate) fn build_health_router() -> Router {
    Router::new()
        .route("/", get(handle_alive))
        .route("/healthz", get(handle_health))
}

async fn handle_alive() -> &'static str {
    ALIVE_MESSAGE
}

async fn handle_health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Serves the keep-alive endpoints used by uptime pingers.
pub(crate) async fn run_health_server(bind: &str) -> Result<()> {
    let listener = TcpListener::bind(bind.trim())
        .await
        .with_context(|| format!("failed to bind keep-alive server on {bind}"))?;
    let local_addr = listener
        .local_addr()
        .context("failed to resolve keep-alive server address")?;
    info!(addr = %local_addr, "keep-alive server listening");

    axum::serve(listener, build_health_router())
        .await
        .context("keep-alive server exited unexpectedly")?;
    Ok(())
}
