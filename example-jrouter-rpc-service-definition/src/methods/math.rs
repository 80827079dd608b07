use crate::ExampleContext;
use jrouter::rpc::{RpcError, RpcException};
use jrouter_rpc_service::{
    RpcHandlerError, RpcMethodDescriptor, RpcMethodRegistryBuilder, RpcParamKind, RpcParams,
    error::RpcRegistryError,
};
use serde_json::json;

pub const HANDLER_TYPE: &str = "Math";

/// Application error code raised by `divide` for a zero divisor.
pub const DIVISION_BY_ZERO_CODE: i32 = -32010;

/// Application error code raised when an integer result does not fit in `i64`.
pub const OVERFLOW_CODE: i32 = -32011;

/// Route that carries `multiply`, which is not visible on the base route.
pub const CALCULATOR_ROUTE: &str = "calculator";

pub fn register(builder: &mut RpcMethodRegistryBuilder<ExampleContext>) -> Result<(), RpcRegistryError> {
    builder
        .register(
            RpcMethodDescriptor::new(HANDLER_TYPE, "add")
                .param("a", RpcParamKind::Integer)
                .param("b", RpcParamKind::Integer),
            add_pair,
        )?
        .register(
            RpcMethodDescriptor::new(HANDLER_TYPE, "add")
                .param("a", RpcParamKind::Integer)
                .param("b", RpcParamKind::Integer)
                .param("c", RpcParamKind::Integer),
            add_triple,
        )?
        .register(
            RpcMethodDescriptor::new(HANDLER_TYPE, "describe").param("value", RpcParamKind::Integer),
            |_: ExampleContext, _: RpcParams| async { Ok::<_, RpcHandlerError>("integer") },
        )?
        .register(
            RpcMethodDescriptor::new(HANDLER_TYPE, "describe").param("value", RpcParamKind::Number),
            |_: ExampleContext, _: RpcParams| async { Ok::<_, RpcHandlerError>("number") },
        )?
        .register(
            RpcMethodDescriptor::new(HANDLER_TYPE, "describe").param("value", RpcParamKind::String),
            |_: ExampleContext, _: RpcParams| async { Ok::<_, RpcHandlerError>("string") },
        )?
        .register(
            RpcMethodDescriptor::new(HANDLER_TYPE, "divide")
                .param("dividend", RpcParamKind::Number)
                .param("divisor", RpcParamKind::Number),
            divide,
        )?
        .register(
            RpcMethodDescriptor::new(HANDLER_TYPE, "round")
                .param("value", RpcParamKind::Number)
                .optional_param("digits", RpcParamKind::Integer),
            round,
        )?
        .register_at(
            CALCULATOR_ROUTE,
            RpcMethodDescriptor::new(HANDLER_TYPE, "multiply")
                .param("a", RpcParamKind::Integer)
                .param("b", RpcParamKind::Integer),
            multiply,
        )?;
    Ok(())
}

async fn add_pair(_context: ExampleContext, params: RpcParams) -> Result<i64, RpcHandlerError> {
    let sum = params.get::<i64>(0)?.checked_add(params.get::<i64>(1)?);
    sum.ok_or_else(overflow)
}

async fn add_triple(_context: ExampleContext, params: RpcParams) -> Result<i64, RpcHandlerError> {
    let (a, b, c) = (params.get::<i64>(0)?, params.get::<i64>(1)?, params.get::<i64>(2)?);
    a.checked_add(b)
        .and_then(|partial| partial.checked_add(c))
        .ok_or_else(overflow)
}

async fn multiply(_context: ExampleContext, params: RpcParams) -> Result<i64, RpcHandlerError> {
    let product = params.get::<i64>(0)?.checked_mul(params.get::<i64>(1)?);
    product.ok_or_else(overflow)
}

fn overflow() -> RpcHandlerError {
    RpcException::application(OVERFLOW_CODE, "Integer overflow").into()
}

async fn divide(_context: ExampleContext, params: RpcParams) -> Result<f64, RpcHandlerError> {
    let dividend = params.get::<f64>(0)?;
    let divisor = params.get::<f64>(1)?;
    if divisor == 0.0 {
        return Err(RpcException::Application(
            RpcError::new(DIVISION_BY_ZERO_CODE, "Division by zero")
                .with_data(json!({ "dividend": dividend })),
        )
        .into());
    }
    Ok(dividend / divisor)
}

async fn round(_context: ExampleContext, params: RpcParams) -> Result<f64, RpcHandlerError> {
    let value = params.get::<f64>(0)?;
    let digits = params.optional::<i32>(1)?.unwrap_or(0);
    let scale = 10f64.powi(digits);
    Ok((value * scale).round() / scale)
}
