use crate::ExampleContext;
use jrouter_rpc_service::{
    RpcHandlerError, RpcMethodDescriptor, RpcMethodRegistryBuilder, RpcParamKind, RpcParams,
    error::RpcRegistryError,
};
use serde_json::Value;

pub const HANDLER_TYPE: &str = "Echo";

pub fn register(builder: &mut RpcMethodRegistryBuilder<ExampleContext>) -> Result<(), RpcRegistryError> {
    builder.register(
        RpcMethodDescriptor::new(HANDLER_TYPE, "echo").param("value", RpcParamKind::Any),
        echo,
    )?;
    Ok(())
}

async fn echo(_context: ExampleContext, params: RpcParams) -> Result<Value, RpcHandlerError> {
    Ok(params.get::<Value>(0)?)
}
