/// The only protocol version the dispatcher accepts.
///
/// Requests carrying any other value in their `jsonrpc` member are rejected
/// with an invalid request error before resolution starts.
pub const JSONRPC_VERSION: &str = "2.0";

/// Message used for errors that are not part of the protocol taxonomy.
///
/// The original failure text is only exposed through the error's `data`
/// member when the endpoint is configured to show server exceptions.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Message carried by the invalid request error produced when the
/// authorization gate denies a call.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Inclusive bounds of the code range JSON-RPC reserves for
/// implementation-defined server errors.
pub const SERVER_ERROR_CODE_MIN: i32 = -32099;
pub const SERVER_ERROR_CODE_MAX: i32 = -32000;
