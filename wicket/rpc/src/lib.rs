//! # wicket-rpc
//!
//! JSON-RPC 2.0-shaped envelope types for the provider gateway: the inbound
//! [`ProviderCall`](request::ProviderCall), the outbound
//! [`RpcResponse`](response::RpcResponse) and the wire
//! [`RpcError`](error::RpcError) bindings.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod error;
pub mod request;
pub mod response;
