//! HTTP proxy in front of the YouTube Data API.
//!
//! `GET /api/videos?region=<code>&category=<id>` forwards to the most-popular
//! chart and relays the upstream JSON body unchanged. Any failure becomes a
//! `500` with `{"error": "Failed to fetch data"}`.

mod config;
mod error;
mod upstream;

pub use config::{DEFAULT_BIND, ProxyConfig, YOUTUBE_API_BASE};
pub use error::ProxyError;
pub use upstream::{UpstreamClient, UpstreamQuery};

use anyhow::{Context, Result};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ProxyState {
    upstream: UpstreamClient,
}

impl ProxyState {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct VideosParams {
    pub region: Option<String>,
    pub category: Option<String>,
}

pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/videos", get(list_videos))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn list_videos(
    State(state): State<ProxyState>,
    params: Result<Query<VideosParams>, QueryRejection>,
) -> Result<Response, ProxyError> {
    let Query(params) = params.map_err(|e| ProxyError::InvalidRequest(e.body_text()))?;
    let query = UpstreamQuery::from_params(params.region.as_deref(), params.category.as_deref());
    let body = state.upstream.fetch(&query).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Runs the proxy until Ctrl-C.
pub async fn serve(config: ProxyConfig) -> Result<()> {
    let bind = config.bind;
    let upstream = UpstreamClient::new(config)?;
    let app = router(ProxyState::new(upstream));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    info!(%bind, "trending proxy listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await
        .context("Proxy server failed")?;
    Ok(())
}
