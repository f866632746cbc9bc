//! Client configuration, fixed once the client is constructed.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Base URL, request timeout and content type shared by every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    content_type: &'static str,
}

impl ClientConfig {
    /// Replace the base URL. A trailing `/` is stripped.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            content_type: JSON_CONTENT_TYPE,
        }
    }
}
