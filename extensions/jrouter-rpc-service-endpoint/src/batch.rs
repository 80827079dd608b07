use crate::{RpcDispatchPipeline, RpcEndpointConfig, to_rpc_error};
use futures::future::join_all;
use jrouter::rpc::{RpcError, RpcErrorCode, RpcId, RpcRequest, RpcResponse};
use jrouter_rpc_service::{RpcHandlerError, RpcPrincipal, RpcRouteContext};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Runs every request as its own spawned task and collects the responses.
///
/// Non-notification tasks are joined, and their responses come back in the
/// order the requests were given, not the order they completed in.
/// Notification tasks are detached under a supervisor that logs if they
/// panic. A task that panics is answered with an internal error; its
/// siblings are unaffected.
///
/// Must be called from within a Tokio runtime.
pub async fn dispatch_concurrently<C>(
    pipeline: RpcDispatchPipeline<C>,
    context: C,
    route: RpcRouteContext,
    principal: Arc<RpcPrincipal>,
    requests: Vec<RpcRequest>,
) -> Vec<RpcResponse>
where
    C: Send + Sync + Clone + 'static,
{
    let show_server_exceptions = pipeline.config.show_server_exceptions;
    let mut pending: Vec<(RpcId, JoinHandle<Option<RpcResponse>>)> = Vec::new();

    for request in requests {
        let id = request.id.clone();
        let method = request.method.clone();
        let handle = tokio::spawn(pipeline.clone().process(
            context.clone(),
            route.clone(),
            Arc::clone(&principal),
            request,
        ));

        match id {
            Some(id) => pending.push((id, handle)),
            None => supervise_notification(method, handle),
        }
    }

    let (ids, handles): (Vec<RpcId>, Vec<_>) = pending.into_iter().unzip();
    join_all(handles)
        .await
        .into_iter()
        .zip(ids)
        .filter_map(|(joined, id)| match joined {
            Ok(response) => response,
            Err(join_error) => {
                tracing::warn!("Request {} aborted: {}", id, join_error);
                let err: RpcHandlerError =
                    format!("Request task aborted: {}", join_error).into();
                Some(RpcResponse::error(
                    Some(id),
                    to_rpc_error(&err, show_server_exceptions),
                ))
            }
        })
        .collect()
}

/// The error answered in place of a batch larger than the configured limit,
/// if any.
pub fn batch_limit_error(config: &RpcEndpointConfig, batch_len: usize) -> Option<RpcResponse> {
    let limit = config.batch_request_limit?;
    if batch_len <= limit {
        return None;
    }

    Some(RpcResponse::error(
        None,
        RpcError::new(
            RpcErrorCode::InvalidRequest,
            format!(
                "Batch of {} requests exceeds the limit of {}",
                batch_len, limit
            ),
        ),
    ))
}

fn supervise_notification(method: String, handle: JoinHandle<Option<RpcResponse>>) {
    tokio::spawn(async move {
        if let Err(join_error) = handle.await {
            tracing::warn!("Notification '{}' aborted: {}", method, join_error);
        }
    });
}
