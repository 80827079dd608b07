mod rpc_error;
mod rpc_error_code;
mod rpc_exception;
mod rpc_id;
mod rpc_params;
mod rpc_payload;
mod rpc_request;
mod rpc_response;

pub use rpc_error::RpcError;
pub use rpc_error_code::RpcErrorCode;
pub use rpc_exception::RpcException;
pub use rpc_id::RpcId;
pub use rpc_params::RpcRequestParams;
pub use rpc_payload::{RpcPayload, RpcRequestParseError, RpcRequestSlot};
pub use rpc_request::RpcRequest;
pub use rpc_response::{RpcResponse, RpcResponsePayload};
