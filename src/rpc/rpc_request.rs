use super::{RpcId, RpcRequestParams};
use crate::constants::JSONRPC_VERSION;
use serde::{Deserialize, Serialize};

/// A decoded JSON-RPC request.
///
/// The `jsonrpc` member defaults to an empty string when missing so that a
/// request without it still decodes and is rejected by version validation
/// (with its id intact) instead of failing as an unreadable object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    #[serde(default)]
    pub jsonrpc: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<RpcRequestParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RpcId>,
}

impl RpcRequest {
    /// Creates a version 2.0 request that expects a response.
    pub fn new(
        id: impl Into<RpcId>,
        method: impl Into<String>,
        params: Option<RpcRequestParams>,
    ) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id: Some(id.into()),
        }
    }

    /// Creates a version 2.0 notification (no id, never answered).
    pub fn notification(method: impl Into<String>, params: Option<RpcRequestParams>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id: None,
        }
    }

    #[inline]
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    #[inline]
    pub fn has_supported_version(&self) -> bool {
        self.jsonrpc == JSONRPC_VERSION
    }
}
