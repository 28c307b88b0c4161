use std::sync::Arc;

use anyhow::{Context, Result};
use axum::body::Bytes;
use reqwest::Url;
use serde::de::IgnoredAny;
use tracing::debug;

use super::config::{MAX_RESULTS, ProxyConfig};
use super::error::ProxyError;
use crate::catalog::DEFAULT_REGION;

/// One request against the most-popular chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamQuery {
    pub region: String,
    pub category: Option<String>,
}

impl UpstreamQuery {
    /// Absent or empty region falls back to the default; empty category means none.
    pub fn from_params(region: Option<&str>, category: Option<&str>) -> Self {
        Self {
            region: region
                .filter(|r| !r.is_empty())
                .unwrap_or(DEFAULT_REGION)
                .to_string(),
            category: category.filter(|c| !c.is_empty()).map(String::from),
        }
    }

    pub fn to_url(&self, base: &str, api_key: &str) -> Result<Url, ProxyError> {
        let max_results = MAX_RESULTS.to_string();
        let mut params = vec![
            ("part", "snippet,statistics"),
            ("chart", "mostPopular"),
            ("regionCode", self.region.as_str()),
            ("maxResults", max_results.as_str()),
            ("key", api_key),
        ];
        if let Some(category) = self.category.as_deref() {
            params.push(("videoCategoryId", category));
        }
        Url::parse_with_params(&format!("{base}/videos"), &params)
            .map_err(|e| ProxyError::InvalidRequest(e.to_string()))
    }
}

/// HTTP client for the YouTube Data API `videos` endpoint.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: Arc<ProxyConfig>,
}

impl UpstreamClient {
    pub fn new(config: ProxyConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create upstream HTTP client")?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Returns the upstream JSON body untouched. Non-2xx and non-JSON bodies are errors.
    pub async fn fetch(&self, query: &UpstreamQuery) -> Result<Bytes, ProxyError> {
        let url = query.to_url(&self.config.upstream_base, &self.config.api_key)?;
        debug!(
            region = %query.region,
            category = query.category.as_deref().unwrap_or("all"),
            "requesting most popular chart"
        );

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus(
                status.as_u16(),
                upstream_message(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string()),
            ));
        }

        serde_json::from_slice::<IgnoredAny>(&body)?;
        Ok(body)
    }
}

/// Pulls `error.message` out of a YouTube error body.
fn upstream_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .pointer("/error/message")
        .and_then(|m| m.as_str())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::config::{DEFAULT_BIND, YOUTUBE_API_BASE};

    #[test]
    fn defaults_region_when_missing_or_empty() {
        assert_eq!(UpstreamQuery::from_params(None, None).region, "TN");
        assert_eq!(UpstreamQuery::from_params(Some(""), None).region, "TN");
        assert_eq!(UpstreamQuery::from_params(Some("US"), None).region, "US");
    }

    #[test]
    fn empty_category_is_dropped() {
        assert_eq!(UpstreamQuery::from_params(Some("US"), Some("")).category, None);
        assert_eq!(
            UpstreamQuery::from_params(Some("US"), Some("10")).category,
            Some("10".to_string())
        );
    }

    #[test]
    fn url_without_category() {
        let url = UpstreamQuery::from_params(Some("US"), None)
            .to_url(YOUTUBE_API_BASE, "test-key")
            .unwrap();
        insta::assert_snapshot!(url.as_str(), @"https://www.googleapis.com/youtube/v3/videos?part=snippet%2Cstatistics&chart=mostPopular&regionCode=US&maxResults=20&key=test-key");
        assert!(!url.query_pairs().any(|(k, _)| k == "videoCategoryId"));
    }

    #[test]
    fn url_with_category() {
        let url = UpstreamQuery::from_params(Some("GB"), Some("10"))
            .to_url(YOUTUBE_API_BASE, "test-key")
            .unwrap();
        insta::assert_snapshot!(url.as_str(), @"https://www.googleapis.com/youtube/v3/videos?part=snippet%2Cstatistics&chart=mostPopular&regionCode=GB&maxResults=20&key=test-key&videoCategoryId=10");
    }

    #[test]
    fn query_values_are_encoded() {
        let url = UpstreamQuery::from_params(Some("US&key=evil"), None)
            .to_url(YOUTUBE_API_BASE, "test-key")
            .unwrap();
        let keys: Vec<_> = url
            .query_pairs()
            .filter(|(k, _)| k == "key")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(keys, vec!["test-key".to_string()]);
    }

    #[test]
    fn extracts_youtube_error_message() {
        let body = br#"{"error": {"code": 403, "message": "quota exceeded"}}"#;
        assert_eq!(upstream_message(body), Some("quota exceeded".to_string()));
        assert_eq!(upstream_message(b"not json"), None);
    }

    #[test]
    fn client_builds_from_config() {
        let config = ProxyConfig::new("k", YOUTUBE_API_BASE, DEFAULT_BIND.parse().unwrap())
            .unwrap();
        assert!(UpstreamClient::new(config).is_ok());
    }
}
