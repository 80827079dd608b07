use jrouter::rpc::{RpcException, RpcRequest, RpcRequestParams};
use jrouter_rpc_service::{RpcMethod, RpcMethodDescriptor, RpcParams, method_key};
use serde_json::{Map, Value};
use std::{fmt, sync::Arc};

/// The method a request resolved to, with its parameters bound in
/// declaration order.
pub struct RpcResolvedMethod<C> {
    pub method: Arc<RpcMethod<C>>,
    pub params: RpcParams,
}

impl<C> Clone for RpcResolvedMethod<C> {
    fn clone(&self) -> Self {
        Self {
            method: Arc::clone(&self.method),
            params: self.params.clone(),
        }
    }
}

impl<C> fmt::Debug for RpcResolvedMethod<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcResolvedMethod")
            .field("method", self.method.descriptor())
            .field("params", &self.params)
            .finish()
    }
}

/// Picks the one candidate a request should run.
///
/// - No candidate with the request's name (case-insensitive):
///   `MethodNotFound`.
/// - A single candidate: named parameters must bind to its declared names,
///   otherwise `MethodNotFound`. Positional parameters are taken as-is with
///   no arity or kind check.
/// - Several candidates (overloads): each signature is tested against the
///   request's parameters. None matching is `MethodNotFound`; more than one
///   is `AmbiguousMethod`.
///
/// Pure with respect to `candidates` and `request`.
pub fn resolve_method<C>(
    candidates: &[Arc<RpcMethod<C>>],
    request: &RpcRequest,
) -> Result<RpcResolvedMethod<C>, RpcException> {
    let lowercase_name = request.method.to_lowercase();
    let key = method_key(&request.method);

    let named_matches: Vec<&Arc<RpcMethod<C>>> = candidates
        .iter()
        .filter(|m| m.descriptor().matches_name(&lowercase_name, key))
        .collect();

    match named_matches.as_slice() {
        [] => Err(method_not_found(request)),
        [method] => {
            let params = match &request.params {
                Some(RpcRequestParams::Named(named)) => {
                    bind_named(method.descriptor(), named).ok_or_else(|| method_not_found(request))?
                }
                Some(RpcRequestParams::Positional(values)) => RpcParams::new(values.clone()),
                None => RpcParams::default(),
            };
            Ok(RpcResolvedMethod {
                method: Arc::clone(method),
                params,
            })
        }
        overloads => {
            let mut signature_matches: Vec<(&Arc<RpcMethod<C>>, RpcParams)> = overloads
                .iter()
                .filter_map(|m| {
                    bind_signature(m.descriptor(), request.params.as_ref()).map(|p| (*m, p))
                })
                .collect();

            match signature_matches.len() {
                0 => Err(method_not_found(request)),
                1 => {
                    let (method, params) = signature_matches.remove(0);
                    Ok(RpcResolvedMethod {
                        method: Arc::clone(method),
                        params,
                    })
                }
                _ => {
                    let signatures: Vec<String> = signature_matches
                        .iter()
                        .map(|(m, _)| m.descriptor().to_string())
                        .collect();
                    Err(RpcException::AmbiguousMethod(format!(
                        "Request for method '{}' matches more than one overload: {}",
                        request.method,
                        signatures.join(", ")
                    )))
                }
            }
        }
    }
}

fn method_not_found(request: &RpcRequest) -> RpcException {
    RpcException::MethodNotFound(format!("Method '{}' not found", request.method))
}

fn bind_signature(
    descriptor: &RpcMethodDescriptor,
    params: Option<&RpcRequestParams>,
) -> Option<RpcParams> {
    match params {
        None => bind_positional(descriptor, &[]),
        Some(RpcRequestParams::Positional(values)) => bind_positional(descriptor, values),
        Some(RpcRequestParams::Named(named)) => bind_named(descriptor, named),
    }
}

/// Arity must fall within `[required, declared]` and every value must be
/// accepted by the parameter in its position.
fn bind_positional(descriptor: &RpcMethodDescriptor, values: &[Value]) -> Option<RpcParams> {
    let declared = descriptor.params();
    if values.len() < descriptor.required_param_count() || values.len() > declared.len() {
        return None;
    }

    values
        .iter()
        .zip(declared)
        .all(|(value, param)| param.accepts(value))
        .then(|| RpcParams::new(values.to_vec()))
}

/// Every supplied name must match a declared parameter (case-insensitive),
/// no parameter may be supplied twice, and every required parameter must be
/// supplied. Missing optional parameters bind to `null`.
fn bind_named(descriptor: &RpcMethodDescriptor, named: &Map<String, Value>) -> Option<RpcParams> {
    let declared = descriptor.params();
    let mut slots: Vec<Option<Value>> = vec![None; declared.len()];

    for (name, value) in named {
        let param = declared.iter().find(|p| p.matches_name(name))?;
        let slot = slots.get_mut(param.position())?;
        if slot.is_some() {
            return None;
        }
        *slot = Some(value.clone());
    }

    let mut values = Vec::with_capacity(declared.len());
    for (param, slot) in declared.iter().zip(slots) {
        match slot {
            Some(value) => values.push(value),
            None if param.is_optional() => values.push(Value::Null),
            None => return None,
        }
    }

    Some(RpcParams::new(values))
}
