use jrouter::rpc::{RpcError, RpcRequest};
use jrouter_rpc_service::RpcRouteContext;
use serde_json::Value;
use std::time::Duration;

/// Hooks run around every dispatched request, notifications included.
///
/// Kept outside the resolve/authorize/invoke logic so that logging, metrics
/// or auditing can be swapped without touching dispatch.
pub trait RpcDispatchObserver: Send + Sync {
    fn before_dispatch(&self, _route: &RpcRouteContext, _request: &RpcRequest) {}

    /// `outcome` is the result payload or the error as it will be rendered.
    fn after_dispatch(
        &self,
        _route: &RpcRouteContext,
        _request: &RpcRequest,
        _outcome: &Result<Value, RpcError>,
        _elapsed: Duration,
    ) {
    }
}

/// Default observer: emits `tracing` debug events.
#[derive(Debug, Default, Clone, Copy)]
pub struct RpcTracingObserver;

impl RpcDispatchObserver for RpcTracingObserver {
    fn before_dispatch(&self, route: &RpcRouteContext, request: &RpcRequest) {
        tracing::debug!(
            "Dispatching '{}' (id: {:?}) on route {}",
            request.method,
            request.id,
            route
        );
    }

    fn after_dispatch(
        &self,
        route: &RpcRouteContext,
        request: &RpcRequest,
        outcome: &Result<Value, RpcError>,
        elapsed: Duration,
    ) {
        match outcome {
            Ok(_) => tracing::debug!(
                "'{}' on route {} completed in {:?}",
                request.method,
                route,
                elapsed
            ),
            Err(error) => tracing::debug!(
                "'{}' on route {} failed in {:?}: {} ({})",
                request.method,
                route,
                elapsed,
                error.message,
                error.code
            ),
        }
    }
}
