use crate::{
    RpcHandlerError, RpcHandlerFuture, RpcMethodDescriptor, RpcMethodHandler, RpcParams,
    RpcPath, RpcRouteContext, error::RpcRegistryError, into_method_handler,
};
use serde::Serialize;
use std::collections::HashMap;
use std::{fmt, future::Future, sync::Arc};

/// A registered method: its descriptor paired with the handler that runs it.
pub struct RpcMethod<C> {
    descriptor: RpcMethodDescriptor,
    handler: RpcMethodHandler<C>,
}

impl<C> RpcMethod<C> {
    pub fn new(descriptor: RpcMethodDescriptor, handler: RpcMethodHandler<C>) -> Self {
        Self {
            descriptor,
            handler,
        }
    }

    pub fn descriptor(&self) -> &RpcMethodDescriptor {
        &self.descriptor
    }

    pub fn invoke(&self, context: C, params: RpcParams) -> RpcHandlerFuture {
        (self.handler)(context, params)
    }
}

impl<C> fmt::Debug for RpcMethod<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcMethod")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Supplies the candidate methods visible to a route.
///
/// Implementations return every method registered to the route, unfiltered;
/// narrowing by name and signature is the resolver's job. An unknown route
/// yields an empty slice.
pub trait RpcMethodProvider<C>: Send + Sync {
    fn candidate_methods(&self, route: &RpcRouteContext) -> &[Arc<RpcMethod<C>>];
}

/// An immutable route → methods table, produced by
/// [`RpcMethodRegistryBuilder::build`].
///
/// Methods keep their registration order within a route.
pub struct RpcMethodRegistry<C> {
    routes: HashMap<Option<RpcPath>, Vec<Arc<RpcMethod<C>>>>,
}

impl<C> RpcMethodRegistry<C> {
    pub fn builder() -> RpcMethodRegistryBuilder<C> {
        RpcMethodRegistryBuilder::new()
    }

    /// Total number of registered methods across all routes.
    pub fn len(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn routes(&self) -> impl Iterator<Item = Option<&RpcPath>> {
        self.routes.keys().map(Option::as_ref)
    }
}

impl<C> RpcMethodProvider<C> for RpcMethodRegistry<C>
where
    C: 'static,
{
    fn candidate_methods(&self, route: &RpcRouteContext) -> &[Arc<RpcMethod<C>>] {
        self.routes
            .get(&route.path().cloned())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl<C> fmt::Debug for RpcMethodRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.routes.iter()).finish()
    }
}

/// Collects method registrations before freezing them into an
/// [`RpcMethodRegistry`].
pub struct RpcMethodRegistryBuilder<C> {
    routes: HashMap<Option<RpcPath>, Vec<Arc<RpcMethod<C>>>>,
}

impl<C> Default for RpcMethodRegistryBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> RpcMethodRegistryBuilder<C> {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Registers a method on the base route.
    pub fn register<F, Fut, R>(
        &mut self,
        descriptor: RpcMethodDescriptor,
        handler: F,
    ) -> Result<&mut Self, RpcRegistryError>
    where
        C: Send + 'static,
        F: Fn(C, RpcParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, RpcHandlerError>> + Send + 'static,
        R: Serialize + Send + 'static,
    {
        self.register_at("", descriptor, handler)
    }

    /// Registers a method on the route named by `path`. An empty path is the
    /// base route.
    pub fn register_at<F, Fut, R>(
        &mut self,
        path: &str,
        descriptor: RpcMethodDescriptor,
        handler: F,
    ) -> Result<&mut Self, RpcRegistryError>
    where
        C: Send + 'static,
        F: Fn(C, RpcParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, RpcHandlerError>> + Send + 'static,
        R: Serialize + Send + 'static,
    {
        self.register_method(path, RpcMethod::new(descriptor, into_method_handler(handler)))
    }

    /// Registers an already type-erased method.
    pub fn register_method(
        &mut self,
        path: &str,
        method: RpcMethod<C>,
    ) -> Result<&mut Self, RpcRegistryError> {
        method.descriptor().validate()?;

        let methods = self.routes.entry(RpcPath::parse(path)).or_default();

        if let Some(existing) = methods
            .iter()
            .find(|m| m.descriptor().has_same_signature(method.descriptor()))
        {
            return Err(RpcRegistryError::DuplicateMethod(format!(
                "{} is already registered on route {}",
                existing.descriptor(),
                RpcRouteContext::for_path(path)
            )));
        }

        tracing::trace!(
            "Registered {} on route {}",
            method.descriptor(),
            RpcRouteContext::for_path(path)
        );
        methods.push(Arc::new(method));
        Ok(self)
    }

    pub fn build(self) -> RpcMethodRegistry<C> {
        RpcMethodRegistry {
            routes: self.routes,
        }
    }
}
