use jrouter_rpc_service::{
    RpcHandlerError, RpcMethodDescriptor, RpcMethodProvider, RpcMethodRegistry,
    RpcMethodRegistryBuilder, RpcParamKind, RpcParams, RpcRouteContext, error::RpcRegistryError,
    method_key,
};
use serde_json::json;

async fn constant(_: (), _: RpcParams) -> Result<u32, RpcHandlerError> {
    Ok(7)
}

fn add_descriptor() -> RpcMethodDescriptor {
    RpcMethodDescriptor::new("Math", "add")
        .param("a", RpcParamKind::Integer)
        .param("b", RpcParamKind::Integer)
}

#[test]
fn method_key_is_case_insensitive() {
    assert_eq!(method_key("Echo"), method_key("echo"));
    assert_eq!(method_key("ECHO"), method_key("echo"));
    assert_ne!(method_key("echo"), method_key("add"));
}

#[test]
fn overloads_with_distinct_signatures_register() {
    let mut builder = RpcMethodRegistryBuilder::<()>::new();
    builder
        .register(add_descriptor(), constant)
        .unwrap()
        .register(
            add_descriptor().param("c", RpcParamKind::Integer),
            constant,
        )
        .unwrap()
        .register(
            RpcMethodDescriptor::new("Math", "add")
                .param("a", RpcParamKind::String)
                .param("b", RpcParamKind::String),
            constant,
        )
        .unwrap();

    let registry = builder.build();
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.candidate_methods(&RpcRouteContext::base()).len(), 3);
}

#[test]
fn duplicate_signature_is_rejected() {
    let mut builder = RpcMethodRegistryBuilder::<()>::new();
    builder.register(add_descriptor(), constant).unwrap();

    // Renaming parameters does not make a new signature.
    let renamed = RpcMethodDescriptor::new("Math", "ADD")
        .param("x", RpcParamKind::Integer)
        .param("y", RpcParamKind::Integer);

    match builder.register(renamed, constant) {
        Err(RpcRegistryError::DuplicateMethod(msg)) => assert!(msg.contains("Math.add")),
        other => panic!("expected duplicate error, got {:?}", other.err()),
    }
}

#[test]
fn same_signature_on_another_route_is_allowed() {
    let mut builder = RpcMethodRegistryBuilder::<()>::new();
    builder
        .register(add_descriptor(), constant)
        .unwrap()
        .register_at("/v2/", add_descriptor(), constant)
        .unwrap();

    let registry = builder.build();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.candidate_methods(&RpcRouteContext::for_path("V2")).len(), 1);
    assert_eq!(registry.candidate_methods(&RpcRouteContext::base()).len(), 1);
    assert!(registry
        .candidate_methods(&RpcRouteContext::for_path("missing"))
        .is_empty());
}

#[test]
fn malformed_descriptors_are_rejected() {
    let mut builder = RpcMethodRegistryBuilder::<()>::new();

    let empty_name = RpcMethodDescriptor::new("Math", "  ");
    assert!(matches!(
        builder.register(empty_name, constant),
        Err(RpcRegistryError::InvalidDescriptor(_))
    ));

    let repeated = RpcMethodDescriptor::new("Math", "sub")
        .param("a", RpcParamKind::Integer)
        .param("A", RpcParamKind::Integer);
    assert!(matches!(
        builder.register(repeated, constant),
        Err(RpcRegistryError::InvalidDescriptor(_))
    ));

    let required_after_optional = RpcMethodDescriptor::new("Math", "sub")
        .optional_param("a", RpcParamKind::Integer)
        .param("b", RpcParamKind::Integer);
    assert!(matches!(
        builder.register(required_after_optional, constant),
        Err(RpcRegistryError::InvalidDescriptor(_))
    ));

    assert!(builder.build().is_empty());
}

#[test]
fn descriptor_matches_lowercased_name_and_key() {
    let descriptor = add_descriptor();
    assert!(descriptor.matches_name("add", method_key("ADD")));
    assert!(!descriptor.matches_name("sub", method_key("sub")));
    assert_eq!(descriptor.required_param_count(), 2);
}

#[tokio::test]
async fn registered_method_invokes_handler() {
    let mut builder = RpcMethodRegistryBuilder::<()>::new();
    builder
        .register(add_descriptor(), |_: (), params: RpcParams| async move {
            Ok::<_, RpcHandlerError>(params.get::<i64>(0)? + params.get::<i64>(1)?)
        })
        .unwrap();
    let registry: RpcMethodRegistry<()> = builder.build();

    let method = &registry.candidate_methods(&RpcRouteContext::base())[0];
    let result = method
        .invoke((), RpcParams::new(vec![json!(2), json!(3)]))
        .await
        .unwrap();
    assert_eq!(result, json!(5));
}

#[tokio::test]
async fn unit_results_serialize_to_null() {
    let mut builder = RpcMethodRegistryBuilder::<()>::new();
    builder
        .register(
            RpcMethodDescriptor::new("Log", "write"),
            |_: (), _: RpcParams| async { Ok::<_, RpcHandlerError>(()) },
        )
        .unwrap();
    let registry = builder.build();

    let method = &registry.candidate_methods(&RpcRouteContext::base())[0];
    assert_eq!(method.invoke((), RpcParams::default()).await.unwrap(), json!(null));
}
