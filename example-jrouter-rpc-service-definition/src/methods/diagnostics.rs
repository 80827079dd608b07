use crate::ExampleContext;
use jrouter_rpc_service::{
    RpcHandlerError, RpcMethodDescriptor, RpcMethodRegistryBuilder, RpcParamKind, RpcParams,
    error::RpcRegistryError,
};
use std::{io, time::Duration};

pub const HANDLER_TYPE: &str = "Diagnostics";

/// Message of the error raised by `fail`. Internal, so it only reaches the
/// caller when server exceptions are shown.
pub const FAILURE_MESSAGE: &str = "storage backend unavailable";

pub fn register(builder: &mut RpcMethodRegistryBuilder<ExampleContext>) -> Result<(), RpcRegistryError> {
    builder
        .register(RpcMethodDescriptor::new(HANDLER_TYPE, "fail"), fail)?
        .register(RpcMethodDescriptor::new(HANDLER_TYPE, "panic"), panic)?
        .register(
            RpcMethodDescriptor::new(HANDLER_TYPE, "sleep").param("millis", RpcParamKind::Integer),
            sleep,
        )?
        .register(
            RpcMethodDescriptor::new(HANDLER_TYPE, "notify").param("message", RpcParamKind::String),
            notify,
        )?;
    Ok(())
}

async fn fail(_context: ExampleContext, _params: RpcParams) -> Result<(), RpcHandlerError> {
    Err(io::Error::other(FAILURE_MESSAGE).into())
}

async fn panic(_context: ExampleContext, _params: RpcParams) -> Result<(), RpcHandlerError> {
    panic!("handler panicked on purpose");
}

/// Sleeps, then returns the number of milliseconds slept.
async fn sleep(_context: ExampleContext, params: RpcParams) -> Result<u64, RpcHandlerError> {
    let millis = params.get::<u64>(0)?;
    tokio::time::sleep(Duration::from_millis(millis)).await;
    Ok(millis)
}

async fn notify(context: ExampleContext, params: RpcParams) -> Result<(), RpcHandlerError> {
    context.notify(params.get::<String>(0)?);
    Ok(())
}
