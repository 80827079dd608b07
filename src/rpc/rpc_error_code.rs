use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Error codes produced by the dispatcher.
///
/// The first five are fixed by JSON-RPC 2.0. `AmbiguousMethod` and
/// `RequestTimeout` sit in the implementation-defined server range
/// (-32099..=-32000). Application errors raised by handlers may use any other
/// code and travel as a raw `i32` on [`super::RpcError`].
#[repr(i32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum RpcErrorCode {
    ParseError = -32700,
    InvalidRequest = -32600,
    MethodNotFound = -32601,
    InvalidParams = -32602,
    InternalError = -32603,
    AmbiguousMethod = -32000,
    RequestTimeout = -32001,
}

impl RpcErrorCode {
    #[inline]
    pub fn code(self) -> i32 {
        self.into()
    }

    pub fn default_message(self) -> &'static str {
        match self {
            RpcErrorCode::ParseError => "Parse error",
            RpcErrorCode::InvalidRequest => "Invalid request",
            RpcErrorCode::MethodNotFound => "Method not found",
            RpcErrorCode::InvalidParams => "Invalid params",
            RpcErrorCode::InternalError => "Internal error",
            RpcErrorCode::AmbiguousMethod => "Ambiguous method",
            RpcErrorCode::RequestTimeout => "Request timed out",
        }
    }
}
