use example_jrouter_rpc_service_definition::{ExampleContext, example_registry, methods::math};
use jrouter::rpc::{RpcException, RpcRequest, RpcRequestParams};
use jrouter_rpc_service::{
    RpcHandlerError, RpcMethodDescriptor, RpcMethodProvider, RpcMethodRegistry,
    RpcMethodRegistryBuilder, RpcParamKind, RpcParams, RpcRouteContext,
};
use jrouter_rpc_service_endpoint::{invoke_method, resolve_method};
use serde_json::{Value, json};
use std::sync::Arc;

fn registry() -> RpcMethodRegistry<ExampleContext> {
    example_registry().expect("example methods register")
}

fn positional(values: Vec<Value>) -> Option<RpcRequestParams> {
    Some(RpcRequestParams::Positional(values))
}

fn named(value: Value) -> Option<RpcRequestParams> {
    match value {
        Value::Object(map) => Some(RpcRequestParams::Named(map)),
        other => panic!("not an object: {}", other),
    }
}

#[test]
fn named_params_bind_by_declared_name() {
    let registry = registry();
    let candidates = registry.candidate_methods(&RpcRouteContext::base());

    let request = RpcRequest::new(1, "echo", named(json!({"value": 42})));
    let resolved = resolve_method(candidates, &request).unwrap();
    assert_eq!(resolved.method.descriptor().name(), "echo");
    assert_eq!(resolved.params.values(), [json!(42)]);

    let request = RpcRequest::new(1, "echo", named(json!({"wrong": 42})));
    assert!(matches!(
        resolve_method(candidates, &request),
        Err(RpcException::MethodNotFound(_))
    ));
}

#[test]
fn method_names_match_case_insensitively() {
    let registry = registry();
    let candidates = registry.candidate_methods(&RpcRouteContext::base());

    let request = RpcRequest::new(1, "ECHO", positional(vec![json!("hi")]));
    assert!(resolve_method(candidates, &request).is_ok());

    let request = RpcRequest::new(1, "nope", None);
    match resolve_method(candidates, &request) {
        Err(RpcException::MethodNotFound(msg)) => assert_eq!(msg, "Method 'nope' not found"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn positional_overloads_resolve_by_arity() {
    let registry = registry();
    let candidates = registry.candidate_methods(&RpcRouteContext::base());

    let three = RpcRequest::new(1, "add", positional(vec![json!(1), json!(2), json!(3)]));
    let resolved = resolve_method(candidates, &three).unwrap();
    assert_eq!(resolved.method.descriptor().params().len(), 3);

    let two = RpcRequest::new(2, "add", positional(vec![json!(1), json!(2)]));
    let resolved = resolve_method(candidates, &two).unwrap();
    assert_eq!(resolved.method.descriptor().params().len(), 2);

    let four = RpcRequest::new(3, "add", positional(vec![json!(1); 4]));
    assert!(matches!(
        resolve_method(candidates, &four),
        Err(RpcException::MethodNotFound(_))
    ));
}

#[test]
fn positional_overloads_resolve_by_kind() {
    let registry = registry();
    let candidates = registry.candidate_methods(&RpcRouteContext::base());

    let describe = |value: Value| RpcRequest::new(1, "describe", positional(vec![value]));

    let resolved = resolve_method(candidates, &describe(json!(1.5))).unwrap();
    assert_eq!(resolved.method.descriptor().params()[0].kind(), RpcParamKind::Number);

    let resolved = resolve_method(candidates, &describe(json!("x"))).unwrap();
    assert_eq!(resolved.method.descriptor().params()[0].kind(), RpcParamKind::String);

    assert!(matches!(
        resolve_method(candidates, &describe(json!(true))),
        Err(RpcException::MethodNotFound(_))
    ));
}

#[test]
fn overlapping_overloads_are_ambiguous() {
    let registry = registry();
    let candidates = registry.candidate_methods(&RpcRouteContext::base());

    // An integer is accepted by both the integer and the number overload.
    let request = RpcRequest::new(1, "describe", positional(vec![json!(5)]));
    match resolve_method(candidates, &request) {
        Err(RpcException::AmbiguousMethod(msg)) => {
            assert!(msg.contains("Math.describe(value)"));
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn identical_named_parameter_sets_are_ambiguous() {
    let mut builder = RpcMethodRegistryBuilder::<()>::new();
    builder
        .register(
            RpcMethodDescriptor::new("Math", "add")
                .param("a", RpcParamKind::Integer)
                .param("b", RpcParamKind::Integer),
            |_: (), _: RpcParams| async { Ok::<_, RpcHandlerError>(1) },
        )
        .unwrap()
        .register(
            RpcMethodDescriptor::new("Math", "add")
                .param("a", RpcParamKind::Number)
                .param("b", RpcParamKind::Number),
            |_: (), _: RpcParams| async { Ok::<_, RpcHandlerError>(2) },
        )
        .unwrap();
    let registry = builder.build();
    let candidates = registry.candidate_methods(&RpcRouteContext::base());

    let request = RpcRequest::new(1, "add", named(json!({"a": 1, "b": 2})));
    assert!(matches!(
        resolve_method(candidates, &request),
        Err(RpcException::AmbiguousMethod(_))
    ));

    // Positional values still discriminate by kind.
    let request = RpcRequest::new(1, "add", positional(vec![json!(1.5), json!(2)]));
    assert!(resolve_method(candidates, &request).is_ok());
}

#[test]
fn named_params_fill_missing_optionals_with_null() {
    let registry = registry();
    let candidates = registry.candidate_methods(&RpcRouteContext::base());

    let request = RpcRequest::new(1, "round", named(json!({"VALUE": 2.345})));
    let resolved = resolve_method(candidates, &request).unwrap();
    assert_eq!(resolved.params.values(), [json!(2.345), Value::Null]);

    let request = RpcRequest::new(1, "round", named(json!({"digits": 2})));
    assert!(matches!(
        resolve_method(candidates, &request),
        Err(RpcException::MethodNotFound(_))
    ));
}

#[test]
fn resolution_is_repeatable() {
    let registry = registry();
    let candidates = registry.candidate_methods(&RpcRouteContext::base());
    let request = RpcRequest::new(1, "add", positional(vec![json!(1), json!(2)]));

    let first = resolve_method(candidates, &request).unwrap();
    let second = resolve_method(candidates, &request).unwrap();
    assert!(Arc::ptr_eq(&first.method, &second.method));
    assert_eq!(first.params, second.params);
}

#[test]
fn routes_scope_candidates() {
    let registry = registry();
    let request = RpcRequest::new(1, "multiply", positional(vec![json!(6), json!(7)]));

    let base = registry.candidate_methods(&RpcRouteContext::base());
    assert!(matches!(
        resolve_method(base, &request),
        Err(RpcException::MethodNotFound(_))
    ));

    let calculator = registry.candidate_methods(&RpcRouteContext::for_path(math::CALCULATOR_ROUTE));
    assert!(resolve_method(calculator, &request).is_ok());
}

#[tokio::test]
async fn single_candidate_positional_binding_defers_type_checks() {
    let registry = registry();
    let candidates = registry.candidate_methods(&RpcRouteContext::base());
    let (context, _notifications) = ExampleContext::new();

    // One `round` overload: the shape is not checked at resolution.
    let request = RpcRequest::new(1, "round", positional(vec![json!("abc")]));
    let resolved = resolve_method(candidates, &request).unwrap();

    let err = invoke_method(resolved, context).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RpcException>(),
        Some(RpcException::InvalidParams(_))
    ));
}

#[tokio::test]
async fn invoker_returns_handler_result() {
    let registry = registry();
    let candidates = registry.candidate_methods(&RpcRouteContext::base());
    let (context, _notifications) = ExampleContext::new();

    let request = RpcRequest::new(1, "round", positional(vec![json!(2.346), json!(2)]));
    let resolved = resolve_method(candidates, &request).unwrap();
    assert_eq!(invoke_method(resolved, context).await.unwrap(), json!(2.35));
}
