use std::fmt;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::warn;

/// Body text returned for every proxy failure.
pub const GENERIC_ERROR: &str = "Failed to fetch data";

/// Why a proxied request failed. Only logs see the distinction; clients get a generic 500.
#[derive(Debug)]
pub enum ProxyError {
    /// Could not build a valid upstream URL or parse the inbound query
    InvalidRequest(String),
    /// Network-level failure talking to the upstream API
    Network(String),
    /// Upstream answered with a non-success status
    UpstreamStatus(u16, String),
    /// Upstream body was not JSON
    InvalidJson(String),
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequest(details) => write!(f, "invalid request: {details}"),
            Self::Network(details) => write!(f, "upstream unreachable: {details}"),
            Self::UpstreamStatus(code, msg) => write!(f, "upstream returned {code}: {msg}"),
            Self::InvalidJson(details) => write!(f, "upstream body is not JSON: {details}"),
        }
    }
}

impl std::error::Error for ProxyError {}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        warn!(error = %self, "proxy request failed");
        let body = Json(json!({ "error": GENERIC_ERROR }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
