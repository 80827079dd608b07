use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Identifier correlating a response with the request that produced it.
///
/// JSON-RPC allows strings and numbers. Any JSON number is kept as written,
/// including ids outside the `i64` range and fractional ones. A `null` id on
/// the wire is read as an absent one, which makes the request a notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(Number),
    String(String),
}

impl From<i64> for RpcId {
    fn from(id: i64) -> Self {
        RpcId::Number(id.into())
    }
}

impl From<&str> for RpcId {
    fn from(id: &str) -> Self {
        RpcId::String(id.to_string())
    }
}

impl From<String> for RpcId {
    fn from(id: String) -> Self {
        RpcId::String(id)
    }
}

impl fmt::Display for RpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcId::Number(n) => write!(f, "{}", n),
            RpcId::String(s) => write!(f, "\"{}\"", s),
        }
    }
}
