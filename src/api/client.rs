use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use super::error::ApiError;
use super::types::{FilterState, Video, VideoListResponse};

pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the trending proxy's `/api/videos` route.
#[derive(Debug, Clone)]
pub struct TrendingClient {
    http: reqwest::Client,
    base_url: String,
}

impl TrendingClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the ranked trending list for `filter`, preserving upstream order.
    pub async fn fetch_trending(&self, filter: &FilterState) -> Result<Vec<Video>, ApiError> {
        let mut query = vec![("region", filter.region.as_str())];
        if let Some(category) = filter.category.as_deref() {
            query.push(("category", category));
        }

        let response = self
            .http
            .get(format!("{}/api/videos", self.base_url))
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(
                status.as_u16(),
                status.canonical_reason().unwrap_or("").into(),
            ));
        }

        let body: VideoListResponse = response.json().await?;
        let videos = body.into_videos();
        debug!(
            region = %filter.region,
            category = filter.category.as_deref().unwrap_or("all"),
            count = videos.len(),
            "fetched trending videos"
        );
        Ok(videos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn item(id: &str, views: &str) -> serde_json::Value {
        json!({
            "id": id,
            "snippet": {
                "title": format!("Video {id}"),
                "channelTitle": "Channel",
                "thumbnails": {"medium": {"url": format!("https://i.ytimg.com/{id}.jpg")}}
            },
            "statistics": {"viewCount": views}
        })
    }

    #[tokio::test]
    async fn fetches_items_for_region() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/videos"))
            .and(query_param("region", "US"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [item("a", "10"), item("b", "20"), item("c", "30")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = TrendingClient::new(server.uri()).unwrap();
        let videos = client
            .fetch_trending(&FilterState::new("US", None))
            .await
            .unwrap();

        let ids: Vec<_> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn sends_category_only_when_set() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/videos"))
            .and(query_param("region", "GB"))
            .and(query_param("category", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = TrendingClient::new(server.uri()).unwrap();
        let videos = client
            .fetch_trending(&FilterState::new("GB", Some("10".into())))
            .await
            .unwrap();
        assert!(videos.is_empty());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[tokio::test]
    async fn omits_category_param_for_all() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = TrendingClient::new(server.uri()).unwrap();
        let videos = client
            .fetch_trending(&FilterState::default())
            .await
            .unwrap();
        assert!(videos.is_empty());

        let requests = server.received_requests().await.unwrap();
        let query = requests[0].url.query().unwrap_or_default().to_string();
        assert_eq!(query, "region=TN");
    }

    #[tokio::test]
    async fn proxy_failure_is_http_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/videos"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"error": "Failed to fetch data"})),
            )
            .mount(&server)
            .await;

        let client = TrendingClient::new(server.uri()).unwrap();
        let err = client
            .fetch_trending(&FilterState::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpStatus(500, _)));
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/videos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = TrendingClient::new(server.uri()).unwrap();
        let err = client
            .fetch_trending(&FilterState::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[tokio::test]
    async fn unreachable_proxy_is_network_error() {
        // Bind then drop a listener so the port is very likely closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = TrendingClient::new(format!("http://{addr}")).unwrap();
        let err = client
            .fetch_trending(&FilterState::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = TrendingClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }
}
