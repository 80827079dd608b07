use crate::{
    RpcDispatchObserver, RpcDispatchPipeline, RpcEndpointConfig, batch_limit_error,
    dispatch_concurrently, error::RpcServiceEndpointError,
};
use jrouter::rpc::{RpcPayload, RpcRequest, RpcRequestParseError, RpcResponse};
use jrouter_rpc_service::{RpcAuthorizer, RpcMethodProvider, RpcPrincipal, RpcRouteContext};
use serde::Serialize;
use std::sync::Arc;

#[async_trait::async_trait]
pub trait RpcServiceEndpointInterface<C>: Send + Sync
where
    C: Send + Sync + Clone + 'static,
{
    // --- METHODS TO BE IMPLEMENTED BY THE STRUCT (e.g., RpcServiceEndpoint) ---

    fn get_provider(&self) -> Arc<dyn RpcMethodProvider<C>>;

    fn get_authorizer(&self) -> Arc<dyn RpcAuthorizer>;

    fn get_observer(&self) -> Arc<dyn RpcDispatchObserver>;

    fn get_config(&self) -> Arc<RpcEndpointConfig>;

    // --- METHODS PROVIDED AUTOMATICALLY BY THE TRAIT ---

    fn dispatch_pipeline(&self) -> RpcDispatchPipeline<C> {
        RpcDispatchPipeline {
            provider: self.get_provider(),
            authorizer: self.get_authorizer(),
            observer: self.get_observer(),
            config: self.get_config(),
        }
    }

    /// Dispatches one request. Returns `None` for a notification, which keeps
    /// running in the background.
    async fn dispatch_request(
        &self,
        context: C,
        route: RpcRouteContext,
        principal: Arc<RpcPrincipal>,
        request: RpcRequest,
    ) -> Option<RpcResponse> {
        dispatch_concurrently(
            self.dispatch_pipeline(),
            context,
            route,
            principal,
            vec![request],
        )
        .await
        .pop()
    }

    /// Dispatches a batch concurrently.
    ///
    /// The result holds one response per non-notification request, in input
    /// order. A batch over the configured limit is answered with a single
    /// invalid request error and nothing is run.
    async fn dispatch_batch(
        &self,
        context: C,
        route: RpcRouteContext,
        principal: Arc<RpcPrincipal>,
        requests: Vec<RpcRequest>,
    ) -> Vec<RpcResponse> {
        let config = self.get_config();
        if let Some(rejection) = batch_limit_error(&config, requests.len()) {
            return vec![rejection];
        }

        dispatch_concurrently(self.dispatch_pipeline(), context, route, principal, requests).await
    }

    /// Decodes a JSON payload, dispatches it, and encodes the reply.
    ///
    /// Returns `Ok(None)` when there is nothing to send back (a notification,
    /// or a batch made only of notifications). Malformed input is answered
    /// with protocol errors; the `Err` case is reserved for failures to encode
    /// the reply.
    async fn read_bytes(
        &self,
        context: C,
        route: RpcRouteContext,
        principal: Arc<RpcPrincipal>,
        bytes: &[u8],
    ) -> Result<Option<Vec<u8>>, RpcServiceEndpointError> {
        let payload = match RpcPayload::from_slice(bytes) {
            Ok(payload) => payload,
            Err(error) => {
                let response = RpcResponse::error(None, error);
                return encode(&response).map(Some);
            }
        };

        let is_batch = payload.is_batch();
        let slots = payload.into_slots();

        if is_batch {
            if let Some(rejection) = batch_limit_error(&self.get_config(), slots.len()) {
                return encode(&[rejection]).map(Some);
            }
        }

        // `None` marks where a dispatched response goes, so entries that were
        // answered during decoding keep their place in the output.
        let mut placement: Vec<Option<RpcResponse>> = Vec::with_capacity(slots.len());
        let mut requests = Vec::with_capacity(slots.len());
        for slot in slots {
            match slot {
                Ok(request) => {
                    if !request.is_notification() {
                        placement.push(None);
                    }
                    requests.push(request);
                }
                Err(RpcRequestParseError::Invalid { id, error }) => {
                    placement.push(Some(RpcResponse::error(id, error)));
                }
                Err(RpcRequestParseError::Null) => {
                    tracing::warn!("Dropping null request entry: no id to answer");
                }
            }
        }

        let mut dispatched =
            dispatch_concurrently(self.dispatch_pipeline(), context, route, principal, requests)
                .await
                .into_iter();

        let responses: Vec<RpcResponse> = placement
            .into_iter()
            .filter_map(|entry| entry.or_else(|| dispatched.next()))
            .collect();

        if responses.is_empty() {
            return Ok(None);
        }

        let encoded = match (is_batch, responses.as_slice()) {
            (false, [response]) => encode(response)?,
            _ => encode(&responses)?,
        };

        Ok(Some(encoded))
    }
}

fn encode<T: Serialize + ?Sized>(reply: &T) -> Result<Vec<u8>, RpcServiceEndpointError> {
    serde_json::to_vec(reply).map_err(|err| {
        tracing::error!("Failed to encode JSON-RPC reply: {}", err);
        RpcServiceEndpointError::from(err)
    })
}
