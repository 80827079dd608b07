use crate::{ExampleContext, methods};
use jrouter_rpc_service::{
    RpcMethodRegistry, RpcMethodRegistryBuilder, RpcPolicyAuthorizer, error::RpcRegistryError,
};

/// Claim the `auditor` policy looks for.
pub const DEPARTMENT_CLAIM: &str = "department";

/// Registers every example method.
pub fn example_registry() -> Result<RpcMethodRegistry<ExampleContext>, RpcRegistryError> {
    let mut builder = RpcMethodRegistryBuilder::new();
    methods::echo::register(&mut builder)?;
    methods::math::register(&mut builder)?;
    methods::admin::register(&mut builder)?;
    methods::diagnostics::register(&mut builder)?;
    Ok(builder.build())
}

/// An authorizer with the `auditor` policy: the caller must carry
/// `department=audit`.
pub fn example_authorizer() -> RpcPolicyAuthorizer {
    RpcPolicyAuthorizer::new().with_policy(methods::admin::AUDITOR_POLICY, |principal| {
        principal.claim(DEPARTMENT_CLAIM) == Some("audit")
    })
}
