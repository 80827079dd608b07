use futures::future::BoxFuture;
use jrouter::rpc::RpcException;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::{future::Future, sync::Arc};

/// Error type returned by handlers.
///
/// Returning an [`RpcException`] (boxed) produces the matching protocol
/// error. Any other error is reported as an internal error.
pub type RpcHandlerError = Box<dyn std::error::Error + Send + Sync>;

pub type RpcHandlerFuture = BoxFuture<'static, Result<Value, RpcHandlerError>>;

/// A type-erased method body. The return value has already been converted
/// to its JSON result payload.
pub type RpcMethodHandler<C> = Arc<dyn Fn(C, RpcParams) -> RpcHandlerFuture + Send + Sync>;

/// Parameter values bound to a method's declared parameters, in declaration
/// order.
///
/// Positional requests on a single candidate are bound without a signature
/// check, so the typed getters are where a wrong count or type surfaces, as
/// [`RpcException::InvalidParams`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RpcParams {
    values: Vec<Value>,
}

impl RpcParams {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Deserializes the value at `index` into `T`.
    pub fn get<T: DeserializeOwned>(&self, index: usize) -> Result<T, RpcException> {
        let value = self.values.get(index).ok_or_else(|| {
            RpcException::InvalidParams(format!("Missing parameter at position {}", index))
        })?;
        decode(index, value)
    }

    /// Like [`Self::get`], but a missing or `null` value yields `None`.
    pub fn optional<T: DeserializeOwned>(&self, index: usize) -> Result<Option<T>, RpcException> {
        match self.values.get(index) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => decode(index, value).map(Some),
        }
    }
}

fn decode<T: DeserializeOwned>(index: usize, value: &Value) -> Result<T, RpcException> {
    T::deserialize(value).map_err(|err| {
        RpcException::InvalidParams(format!("Parameter at position {} is invalid: {}", index, err))
    })
}

/// Erases a typed async handler into an [`RpcMethodHandler`].
///
/// The handler's output is converted with `serde_json::to_value`; a handler
/// returning `()` produces a `null` result.
pub fn into_method_handler<C, F, Fut, R>(handler: F) -> RpcMethodHandler<C>
where
    C: Send + 'static,
    F: Fn(C, RpcParams) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, RpcHandlerError>> + Send + 'static,
    R: Serialize + Send + 'static,
{
    Arc::new(move |context: C, params: RpcParams| {
        let fut = handler(context, params);
        Box::pin(async move {
            let output = fut.await?;
            let value = serde_json::to_value(output)?;
            Ok(value)
        }) as RpcHandlerFuture
    })
}
