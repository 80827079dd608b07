use super::RpcErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `error` member of a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    /// Creates an error without data. `code` accepts either an
    /// [`RpcErrorCode`] or a raw application code.
    pub fn new(code: impl Into<i32>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Creates an error carrying the code's standard message.
    pub fn from_code(code: RpcErrorCode) -> Self {
        Self::new(code, code.default_message())
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// The known code this error carries, or `None` for application codes.
    pub fn kind(&self) -> Option<RpcErrorCode> {
        RpcErrorCode::try_from(self.code).ok()
    }
}
