use super::{RpcError, RpcErrorCode};
use crate::constants::UNAUTHORIZED_MESSAGE;
use serde_json::Value;
use std::fmt;

/// A failure that is part of the protocol's error taxonomy.
///
/// Anything raised during resolution, authorization or invocation that
/// downcasts to `RpcException` is rendered with its own code and message.
/// Every other error is treated as internal and redacted unless the endpoint
/// shows server exceptions.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcException {
    /// Unsupported protocol version or an otherwise unusable request.
    InvalidRequest(String),
    MethodNotFound(String),
    /// More than one overload accepts the request's parameters.
    AmbiguousMethod(String),
    /// A bound parameter is missing or has the wrong type for the handler.
    InvalidParams(String),
    /// The authorization gate denied the call. Rendered as an invalid request.
    Unauthorized,
    Timeout,
    /// An error raised deliberately by application code.
    Application(RpcError),
}

impl RpcException {
    /// Shorthand for an application error without data.
    pub fn application(code: i32, message: impl Into<String>) -> Self {
        RpcException::Application(RpcError::new(code, message))
    }

    pub fn code(&self) -> i32 {
        match self {
            RpcException::InvalidRequest(_) | RpcException::Unauthorized => {
                RpcErrorCode::InvalidRequest.code()
            }
            RpcException::MethodNotFound(_) => RpcErrorCode::MethodNotFound.code(),
            RpcException::AmbiguousMethod(_) => RpcErrorCode::AmbiguousMethod.code(),
            RpcException::InvalidParams(_) => RpcErrorCode::InvalidParams.code(),
            RpcException::Timeout => RpcErrorCode::RequestTimeout.code(),
            RpcException::Application(error) => error.code,
        }
    }

    /// Stable name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RpcException::InvalidRequest(_) => "InvalidRequest",
            RpcException::MethodNotFound(_) => "MethodNotFound",
            RpcException::AmbiguousMethod(_) => "AmbiguousMethod",
            RpcException::InvalidParams(_) => "InvalidParams",
            RpcException::Unauthorized => "Unauthorized",
            RpcException::Timeout => "Timeout",
            RpcException::Application(_) => "Application",
        }
    }

    /// Data supplied by the raiser. Only application errors carry any.
    pub fn data(&self) -> Option<&Value> {
        match self {
            RpcException::Application(error) => error.data.as_ref(),
            _ => None,
        }
    }

    /// The error object this exception renders as, without diagnostics.
    pub fn to_rpc_error(&self) -> RpcError {
        RpcError {
            code: self.code(),
            message: self.to_string(),
            data: self.data().cloned(),
        }
    }
}

impl fmt::Display for RpcException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcException::InvalidRequest(msg)
            | RpcException::MethodNotFound(msg)
            | RpcException::AmbiguousMethod(msg)
            | RpcException::InvalidParams(msg) => write!(f, "{}", msg),
            RpcException::Unauthorized => write!(f, "{}", UNAUTHORIZED_MESSAGE),
            RpcException::Timeout => {
                write!(f, "{}", RpcErrorCode::RequestTimeout.default_message())
            }
            RpcException::Application(error) => write!(f, "{}", error.message),
        }
    }
}

impl std::error::Error for RpcException {}

impl From<RpcError> for RpcException {
    fn from(error: RpcError) -> Self {
        RpcException::Application(error)
    }
}
