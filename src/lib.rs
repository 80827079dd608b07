//! Protocol model for JSON-RPC 2.0.
//!
//! This crate holds the wire-adjacent types shared by the service and endpoint
//! extensions: request identifiers, requests and their parameters, responses,
//! error objects and codes, and the [`rpc::RpcException`] taxonomy that handlers
//! raise to produce protocol-level errors instead of internal ones.
//!
//! Decoding a raw payload into a single request or a batch is provided by
//! [`rpc::RpcPayload`]; everything past that point (resolution, authorization,
//! invocation) lives in `jrouter-rpc-service-endpoint`.

pub mod constants;
pub mod rpc;
