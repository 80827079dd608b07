use std::fmt;

/// Byte-level failures of [`crate::RpcServiceEndpointInterface::read_bytes`].
///
/// Request problems never show up here; they are answered as error
/// responses.
#[derive(Debug)]
pub enum RpcServiceEndpointError {
    Encode(serde_json::Error),
}

impl fmt::Display for RpcServiceEndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcServiceEndpointError::Encode(e) => write!(f, "Failed to encode response: {}", e),
        }
    }
}

impl std::error::Error for RpcServiceEndpointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RpcServiceEndpointError::Encode(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for RpcServiceEndpointError {
    fn from(err: serde_json::Error) -> Self {
        RpcServiceEndpointError::Encode(err)
    }
}
