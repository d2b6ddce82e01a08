//! # Wicket
//!
//! A wallet provider request gateway: the component that mediates every
//! request a page (a dApp) makes against the wallet's signing and account
//! capability. It decides per origin and per method whether a request may
//! proceed, tracks which origins currently hold live account access,
//! dispatches authorized requests to the matching handler and relays
//! account/network/connection state changes to the rest of the extension.
//!
//! The gateway is the trust boundary between untrusted page script and
//! private-key-holding wallet logic. All cryptographic and chain operations
//! are delegated to the [`Wallet`](wallet::Wallet) collaborator; this crate
//! never touches keys.
//!
//! Entry point: [`ProviderApi::handle`](provider::ProviderApi::handle) -
//! one inbound call, exactly one response, no panics across the boundary.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod config;
pub mod connections;
pub mod permissions;
pub mod provider;
pub mod pubsub;
pub mod wallet;

pub use config::GatewayConfig;
pub use connections::ConnectionRegistry;
pub use permissions::PermissionManager;
pub use provider::{error::GatewayError, ProviderApi};
pub use pubsub::EventBus;
pub use wallet::{RpcEndpoint, Wallet, WalletAccount, WalletError, WalletTransaction};
