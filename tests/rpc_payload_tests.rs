use jrouter::rpc::{
    RpcErrorCode, RpcId, RpcPayload, RpcRequest, RpcRequestParams, RpcRequestParseError,
};
use serde_json::json;

#[test]
fn decodes_single_request_with_named_params() {
    let payload =
        RpcPayload::from_slice(br#"{"jsonrpc":"2.0","method":"echo","params":{"value":42},"id":1}"#)
            .unwrap();
    assert!(!payload.is_batch());

    let slots = payload.into_slots();
    assert_eq!(slots.len(), 1);
    let request = slots[0].as_ref().unwrap();
    assert_eq!(request.method, "echo");
    assert_eq!(request.id, Some(RpcId::from(1)));
    assert!(request.has_supported_version());
    match &request.params {
        Some(RpcRequestParams::Named(named)) => assert_eq!(named["value"], json!(42)),
        other => panic!("expected named params, got {:?}", other),
    }
}

#[test]
fn missing_or_null_id_is_a_notification() {
    let without_id = RpcPayload::from_slice(br#"{"jsonrpc":"2.0","method":"notify"}"#).unwrap();
    let with_null_id =
        RpcPayload::from_slice(br#"{"jsonrpc":"2.0","method":"notify","id":null}"#).unwrap();

    for payload in [without_id, with_null_id] {
        let request = payload.into_slots().remove(0).unwrap();
        assert!(request.is_notification());
    }
}

#[test]
fn string_ids_are_preserved() {
    let payload =
        RpcPayload::from_slice(br#"{"jsonrpc":"2.0","method":"echo","id":"abc"}"#).unwrap();
    let request = payload.into_slots().remove(0).unwrap();
    assert_eq!(request.id, Some(RpcId::from("abc")));
    assert!(request.params.is_none());
}

#[test]
fn invalid_json_is_a_parse_error() {
    let error = RpcPayload::from_slice(b"{\"jsonrpc\": \"2.0\", \"method\"").unwrap_err();
    assert_eq!(error.kind(), Some(RpcErrorCode::ParseError));
    assert_eq!(error.code, -32700);
}

#[test]
fn empty_batch_is_an_invalid_request() {
    let error = RpcPayload::from_slice(b"[]").unwrap_err();
    assert_eq!(error.kind(), Some(RpcErrorCode::InvalidRequest));
}

#[test]
fn batch_entries_decode_independently() {
    let payload = RpcPayload::from_value(json!([
        {"jsonrpc": "2.0", "method": "add", "params": [1, 2], "id": 1},
        {"jsonrpc": "2.0", "params": [1], "id": 2},
        {"jsonrpc": "2.0", "method": "add", "params": 7, "id": "three"},
        1,
        null,
        {"jsonrpc": "2.0", "method": "log"}
    ]))
    .unwrap();
    assert!(payload.is_batch());

    let slots = payload.into_slots();
    assert_eq!(slots.len(), 6);

    assert!(slots[0].is_ok());

    // No method, but the id is readable.
    match &slots[1] {
        Err(RpcRequestParseError::Invalid { id, error }) => {
            assert_eq!(id, &Some(RpcId::from(2)));
            assert_eq!(error.kind(), Some(RpcErrorCode::InvalidRequest));
        }
        other => panic!("unexpected slot: {:?}", other),
    }

    // Scalar params are not a valid shape.
    match &slots[2] {
        Err(RpcRequestParseError::Invalid { id, .. }) => {
            assert_eq!(id, &Some(RpcId::from("three")))
        }
        other => panic!("unexpected slot: {:?}", other),
    }

    match &slots[3] {
        Err(RpcRequestParseError::Invalid { id, .. }) => assert_eq!(id, &None),
        other => panic!("unexpected slot: {:?}", other),
    }

    assert_eq!(slots[4], Err(RpcRequestParseError::Null));
    assert!(slots[5].as_ref().unwrap().is_notification());
}

#[test]
fn missing_version_is_decoded_but_unsupported() {
    let payload = RpcPayload::from_slice(br#"{"method":"echo","id":1}"#).unwrap();
    let request = payload.into_slots().remove(0).unwrap();
    assert!(!request.has_supported_version());

    let payload = RpcPayload::from_slice(br#"{"jsonrpc":"1.0","method":"echo","id":1}"#).unwrap();
    let request = payload.into_slots().remove(0).unwrap();
    assert!(!request.has_supported_version());
}

#[test]
fn request_serialization_omits_absent_members() {
    let notification = RpcRequest::notification("ping", None);
    assert_eq!(
        serde_json::to_value(&notification).unwrap(),
        json!({"jsonrpc": "2.0", "method": "ping"})
    );

    let request = RpcRequest::new(7, "add", Some(vec![json!(1), json!(2)].into()));
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"jsonrpc": "2.0", "method": "add", "params": [1, 2], "id": 7})
    );
}

#[test]
fn numeric_ids_outside_i64_are_kept() {
    let payload = RpcPayload::from_slice(
        br#"[
            {"jsonrpc":"2.0","method":"echo","id":18446744073709551615},
            {"jsonrpc":"2.0","method":"echo","id":1.5}
        ]"#,
    )
    .unwrap();

    let ids: Vec<Option<RpcId>> = payload
        .into_slots()
        .into_iter()
        .map(|slot| slot.unwrap().id)
        .collect();
    assert_eq!(
        ids,
        [
            Some(RpcId::Number(u64::MAX.into())),
            Some(RpcId::Number(serde_json::Number::from_f64(1.5).unwrap())),
        ]
    );
}

#[test]
fn malformed_entry_message_is_generic() {
    let payload = RpcPayload::from_value(json!({"jsonrpc": "2.0", "id": 4})).unwrap();
    match payload.into_slots().remove(0) {
        Err(RpcRequestParseError::Invalid { id, error }) => {
            assert_eq!(id, Some(RpcId::from(4)));
            assert_eq!(error.message, "Invalid request");
            assert!(error.data.is_none());
        }
        other => panic!("unexpected slot: {:?}", other),
    }
}
