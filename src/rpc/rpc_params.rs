use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `params` member of a request.
///
/// Positional and named parameters are mutually exclusive; a request without
/// a `params` member carries `None` rather than an empty variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcRequestParams {
    Positional(Vec<Value>),
    Named(Map<String, Value>),
}

impl RpcRequestParams {
    /// Number of supplied values, regardless of shape.
    pub fn len(&self) -> usize {
        match self {
            RpcRequestParams::Positional(values) => values.len(),
            RpcRequestParams::Named(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_named(&self) -> bool {
        matches!(self, RpcRequestParams::Named(_))
    }
}

impl From<Vec<Value>> for RpcRequestParams {
    fn from(values: Vec<Value>) -> Self {
        RpcRequestParams::Positional(values)
    }
}

impl From<Map<String, Value>> for RpcRequestParams {
    fn from(map: Map<String, Value>) -> Self {
        RpcRequestParams::Named(map)
    }
}
