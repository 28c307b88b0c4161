use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Result, bail};

pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
/// Upper bound on items requested from the most-popular chart.
pub const MAX_RESULTS: u32 = 20;
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Startup configuration for the proxy. The API key lives here and nowhere else.
#[derive(Clone)]
pub struct ProxyConfig {
    pub api_key: String,
    pub upstream_base: String,
    pub bind: SocketAddr,
    pub timeout: Duration,
}

impl ProxyConfig {
    pub fn new(
        api_key: impl Into<String>,
        upstream_base: impl Into<String>,
        bind: SocketAddr,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            bail!("YouTube API key is empty. Pass --api-key or set YOUTUBE_API_KEY.");
        }
        Ok(Self {
            api_key,
            upstream_base: upstream_base.into().trim_end_matches('/').to_string(),
            bind,
            timeout: UPSTREAM_TIMEOUT,
        })
    }
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("api_key", &"<redacted>")
            .field("upstream_base", &self.upstream_base)
            .field("bind", &self.bind)
            .field("timeout", &self.timeout)
            .finish()
    }
}
