use crate::{
    RpcDispatchObserver, RpcEndpointConfig, invoke_method, is_authorized, resolve_method,
    to_rpc_error,
};
use jrouter::constants::JSONRPC_VERSION;
use jrouter::rpc::{RpcException, RpcRequest, RpcResponse};
use jrouter_rpc_service::{
    RpcAuthorizer, RpcHandlerError, RpcMethodProvider, RpcPrincipal, RpcRouteContext,
};
use serde_json::Value;
use std::{sync::Arc, time::Instant};

/// Everything a single request needs to run, detached from the endpoint so
/// it can move into a spawned task.
///
/// All members are shared and read-only.
pub struct RpcDispatchPipeline<C> {
    pub provider: Arc<dyn RpcMethodProvider<C>>,
    pub authorizer: Arc<dyn RpcAuthorizer>,
    pub observer: Arc<dyn RpcDispatchObserver>,
    pub config: Arc<RpcEndpointConfig>,
}

impl<C> Clone for RpcDispatchPipeline<C> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            authorizer: Arc::clone(&self.authorizer),
            observer: Arc::clone(&self.observer),
            config: Arc::clone(&self.config),
        }
    }
}

impl<C> RpcDispatchPipeline<C>
where
    C: Send + Sync + Clone + 'static,
{
    /// Runs one request to completion and builds its response.
    ///
    /// Never fails: every error is mapped to an error response. Returns
    /// `None` for notifications, whose failures are logged instead.
    pub async fn process(
        self,
        context: C,
        route: RpcRouteContext,
        principal: Arc<RpcPrincipal>,
        request: RpcRequest,
    ) -> Option<RpcResponse> {
        self.observer.before_dispatch(&route, &request);
        let started = Instant::now();

        let execution = self.execute(context, &route, &principal, &request);
        let outcome = match self.config.request_timeout() {
            Some(limit) => match tokio::time::timeout(limit, execution).await {
                Ok(outcome) => outcome,
                Err(_) => Err(RpcException::Timeout.into()),
            },
            None => execution.await,
        };

        if request.is_notification() {
            if let Err(err) = &outcome {
                tracing::warn!("Notification '{}' failed: {}", request.method, err);
            }
        }

        let outcome =
            outcome.map_err(|err| to_rpc_error(&err, self.config.show_server_exceptions));
        self.observer
            .after_dispatch(&route, &request, &outcome, started.elapsed());

        let id = request.id?;
        Some(match outcome {
            Ok(result) => RpcResponse::success(Some(id), result),
            Err(error) => RpcResponse::error(Some(id), error),
        })
    }

    /// Validate → Resolve → Authorize → Invoke.
    pub async fn execute(
        &self,
        context: C,
        route: &RpcRouteContext,
        principal: &RpcPrincipal,
        request: &RpcRequest,
    ) -> Result<Value, RpcHandlerError> {
        if !request.has_supported_version() {
            return Err(RpcException::InvalidRequest(format!(
                "Request must be JSON-RPC version {}",
                JSONRPC_VERSION
            ))
            .into());
        }

        let resolved = resolve_method(self.provider.candidate_methods(route), request)?;

        if !is_authorized(
            resolved.method.descriptor(),
            principal,
            self.authorizer.as_ref(),
        )
        .await?
        {
            return Err(RpcException::Unauthorized.into());
        }

        invoke_method(resolved, context).await
    }
}
