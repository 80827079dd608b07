use crate::RpcResolvedMethod;
use jrouter_rpc_service::RpcHandlerError;
use serde_json::Value;

/// Runs a resolved method and awaits its result payload.
///
/// A method that returns nothing yields `Value::Null`. Failures are returned
/// untouched for the error mapper to classify.
pub async fn invoke_method<C>(
    resolved: RpcResolvedMethod<C>,
    context: C,
) -> Result<Value, RpcHandlerError> {
    let RpcResolvedMethod { method, params } = resolved;
    method.invoke(context, params).await
}
