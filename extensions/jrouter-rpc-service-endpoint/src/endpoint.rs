use super::{RpcDispatchObserver, RpcEndpointConfig, RpcServiceEndpointInterface, RpcTracingObserver};
use jrouter_rpc_service::{RpcAuthorizer, RpcMethodProvider, RpcPolicyAuthorizer};
use std::sync::Arc;

/// A concrete JSON-RPC endpoint, generic over the context type `C` handed to
/// every handler.
///
/// `C` is cloned once per request, so it is the place to carry per-request
/// handler state or shared services.
pub struct RpcServiceEndpoint<C>
where
    C: Send + Sync + Clone + 'static,
{
    provider: Arc<dyn RpcMethodProvider<C>>,
    authorizer: Arc<dyn RpcAuthorizer>,
    observer: Arc<dyn RpcDispatchObserver>,
    config: Arc<RpcEndpointConfig>,
}

impl<C> RpcServiceEndpoint<C>
where
    C: Send + Sync + Clone + 'static,
{
    /// Creates an endpoint over `provider` with the default policy
    /// authorizer, the tracing observer and the default configuration.
    pub fn new<P>(provider: P) -> Self
    where
        P: RpcMethodProvider<C> + 'static,
    {
        Self {
            provider: Arc::new(provider),
            authorizer: Arc::new(RpcPolicyAuthorizer::new()),
            observer: Arc::new(RpcTracingObserver),
            config: Arc::new(RpcEndpointConfig::default()),
        }
    }

    pub fn with_authorizer<A>(mut self, authorizer: A) -> Self
    where
        A: RpcAuthorizer + 'static,
    {
        self.authorizer = Arc::new(authorizer);
        self
    }

    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: RpcDispatchObserver + 'static,
    {
        self.observer = Arc::new(observer);
        self
    }

    pub fn with_config(mut self, config: RpcEndpointConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn config(&self) -> &RpcEndpointConfig {
        &self.config
    }
}

impl<C> RpcServiceEndpointInterface<C> for RpcServiceEndpoint<C>
where
    C: Send + Sync + Clone + 'static,
{
    fn get_provider(&self) -> Arc<dyn RpcMethodProvider<C>> {
        self.provider.clone()
    }

    fn get_authorizer(&self) -> Arc<dyn RpcAuthorizer> {
        self.authorizer.clone()
    }

    fn get_observer(&self) -> Arc<dyn RpcDispatchObserver> {
        self.observer.clone()
    }

    fn get_config(&self) -> Arc<RpcEndpointConfig> {
        self.config.clone()
    }
}
