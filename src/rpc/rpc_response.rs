use super::{RpcError, RpcId};
use crate::constants::JSONRPC_VERSION;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Exactly one of `result` or `error`.
///
/// Flattened into [`RpcResponse`], so it serializes as a sibling `result` or
/// `error` member next to `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpcResponsePayload {
    Result(Value),
    Error(RpcError),
}

/// A response to a single non-notification request.
///
/// `id` is `None` only for errors that cannot be attributed to a request
/// (unparseable payloads, empty or oversized batches); it serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    #[serde(flatten)]
    pub payload: RpcResponsePayload,
}

impl RpcResponse {
    pub fn success(id: Option<RpcId>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            payload: RpcResponsePayload::Result(result),
        }
    }

    pub fn error(id: Option<RpcId>, error: RpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            payload: RpcResponsePayload::Error(error),
        }
    }

    pub fn result(&self) -> Option<&Value> {
        match &self.payload {
            RpcResponsePayload::Result(value) => Some(value),
            RpcResponsePayload::Error(_) => None,
        }
    }

    pub fn rpc_error(&self) -> Option<&RpcError> {
        match &self.payload {
            RpcResponsePayload::Result(_) => None,
            RpcResponsePayload::Error(error) => Some(error),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.payload, RpcResponsePayload::Error(_))
    }
}
