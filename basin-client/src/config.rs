//! Client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`Client`](crate::Client).
///
/// `api_base_url` carries the version prefix, so endpoint paths can be
/// appended directly. Tests point it at a local mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Basin REST API.
    pub api_base_url: String,
    /// Application id, sent as `X-Basin-Application-Id` on every request.
    pub app_id: String,
    /// REST key, sent as `X-Basin-REST-API-Key` on every request.
    pub rest_api_key: String,
    /// Request timeout for the underlying HTTP client, in seconds.
    pub timeout_secs: u64,
    /// How long transient notices stay on screen, in milliseconds.
    pub notice_duration_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.basin.dev/1".to_string(),
            app_id: String::new(),
            rest_api_key: String::new(),
            timeout_secs: 30,
            notice_duration_ms: 3_000,
        }
    }
}
