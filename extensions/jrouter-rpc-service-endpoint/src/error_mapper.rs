use jrouter::constants::INTERNAL_ERROR_MESSAGE;
use jrouter::rpc::{RpcError, RpcErrorCode, RpcException};
use jrouter_rpc_service::RpcHandlerError;
use serde_json::{Value, json};

/// Renders a pipeline failure as a protocol error object.
///
/// An [`RpcException`] keeps its own code, message and data; with
/// `show_server_exceptions` a `{kind, message}` object is attached as `data`
/// when it carries none. Denials never carry data. Anything else becomes an internal error with a generic
/// message, and its own message is attached only with
/// `show_server_exceptions`.
pub fn to_rpc_error(err: &RpcHandlerError, show_server_exceptions: bool) -> RpcError {
    if let Some(exception) = err.downcast_ref::<RpcException>() {
        let mut error = exception.to_rpc_error();
        let is_denial = matches!(exception, RpcException::Unauthorized);
        if show_server_exceptions && error.data.is_none() && !is_denial {
            error.data = Some(json!({
                "kind": exception.kind_name(),
                "message": exception.to_string(),
            }));
        }
        return error;
    }

    let error = RpcError::new(RpcErrorCode::InternalError, INTERNAL_ERROR_MESSAGE);
    if show_server_exceptions {
        error.with_data(Value::String(err.to_string()))
    } else {
        error
    }
}
