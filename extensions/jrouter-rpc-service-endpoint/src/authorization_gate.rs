use jrouter_rpc_service::{
    RpcAuthorizeRequirement, RpcAuthorizer, RpcHandlerError, RpcMethodDescriptor, RpcPrincipal,
};

/// Decides whether `principal` may call the method `descriptor` describes.
///
/// Methods without requirements, and methods that allow anonymous callers,
/// are admitted without consulting `authorizer`. Otherwise every requirement
/// is combined into one policy and evaluated against the principal. Errors
/// from the authorizer propagate; they are not treated as a denial.
pub async fn is_authorized(
    descriptor: &RpcMethodDescriptor,
    principal: &RpcPrincipal,
    authorizer: &dyn RpcAuthorizer,
) -> Result<bool, RpcHandlerError> {
    if descriptor.authorization().is_empty() || descriptor.allows_anonymous() {
        return Ok(true);
    }

    let requirements: Vec<RpcAuthorizeRequirement> =
        descriptor.authorization().iter().cloned().collect();
    let policy = authorizer.combine(&requirements).await?;
    authorizer.evaluate(principal, &policy).await
}
