use crate::constants::{
    DEFAULT_BATCH_REQUEST_LIMIT, DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_SHOW_SERVER_EXCEPTIONS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Endpoint options.
///
/// Deserializable from any serde format; missing fields take their defaults.
///
/// ```rust
/// use jrouter_rpc_service_endpoint::RpcEndpointConfig;
///
/// let config: RpcEndpointConfig =
///     serde_json::from_str(r#"{ "show_server_exceptions": true }"#).unwrap();
/// assert!(config.show_server_exceptions);
/// assert_eq!(config.batch_request_limit, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcEndpointConfig {
    /// Attach failure detail to error responses as `data`.
    pub show_server_exceptions: bool,
    /// Reject batches with more entries than this.
    pub batch_request_limit: Option<usize>,
    /// Per-request deadline covering resolution, authorization and invocation.
    pub request_timeout_ms: Option<u64>,
}

impl Default for RpcEndpointConfig {
    fn default() -> Self {
        Self {
            show_server_exceptions: DEFAULT_SHOW_SERVER_EXCEPTIONS,
            batch_request_limit: DEFAULT_BATCH_REQUEST_LIMIT,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl RpcEndpointConfig {
    pub fn with_show_server_exceptions(mut self, show: bool) -> Self {
        self.show_server_exceptions = show;
        self
    }

    pub fn with_batch_request_limit(mut self, limit: usize) -> Self {
        self.batch_request_limit = Some(limit);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        // Saturates at `u64::MAX` ms.
        self.request_timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}
