use crate::ExampleContext;
use jrouter_rpc_service::{
    RpcAuthorizeRequirement, RpcHandlerError, RpcMethodDescriptor, RpcMethodRegistryBuilder,
    RpcParams, error::RpcRegistryError,
};

pub const HANDLER_TYPE: &str = "Admin";

pub const ADMIN_ROLE: &str = "admin";

/// Policy name checked by `audit`. See [`crate::example_authorizer`].
pub const AUDITOR_POLICY: &str = "auditor";

pub fn register(builder: &mut RpcMethodRegistryBuilder<ExampleContext>) -> Result<(), RpcRegistryError> {
    builder
        .register(
            RpcMethodDescriptor::new(HANDLER_TYPE, "reset")
                .authorize(RpcAuthorizeRequirement::roles([ADMIN_ROLE])),
            reset,
        )?
        .register(
            RpcMethodDescriptor::new(HANDLER_TYPE, "status")
                .authorize(RpcAuthorizeRequirement::authenticated())
                .allow_anonymous(),
            |_: ExampleContext, _: RpcParams| async { Ok::<_, RpcHandlerError>("ok") },
        )?
        .register(
            RpcMethodDescriptor::new(HANDLER_TYPE, "audit")
                .authorize(RpcAuthorizeRequirement::policy(AUDITOR_POLICY)),
            |context: ExampleContext, _: RpcParams| async move {
                Ok::<_, RpcHandlerError>(context.admin_reset_count())
            },
        )?
        .register(
            RpcMethodDescriptor::new(HANDLER_TYPE, "whoami")
                .authorize(RpcAuthorizeRequirement::policy("unregistered")),
            |_: ExampleContext, _: RpcParams| async { Ok::<_, RpcHandlerError>(()) },
        )?;
    Ok(())
}

async fn reset(context: ExampleContext, _params: RpcParams) -> Result<usize, RpcHandlerError> {
    Ok(context.record_admin_reset())
}
