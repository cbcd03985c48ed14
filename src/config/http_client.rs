//! Configuration for the outbound HTTP client
//!
//! Timeouts live on the transport; the request handler itself never
//! enforces one.

use std::env;
use std::time::Duration;

/// Timeouts shared by the weather provider and geolocation clients
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Connection timeout (in seconds)
    pub connect_timeout_seconds: u64,

    /// Whole-request timeout (in seconds)
    pub timeout_seconds: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: 3,
            timeout_seconds: 10,
        }
    }
}

impl HttpClientConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let connect_timeout_seconds = env::var("HTTP_CLIENT_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let timeout_seconds = env::var("HTTP_CLIENT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            connect_timeout_seconds,
            timeout_seconds,
        }
    }

    /// Build a pooled reqwest client with these timeouts
    pub fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_seconds))
            .connect_timeout(Duration::from_secs(self.connect_timeout_seconds))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
    }
}
