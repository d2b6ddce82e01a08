//! The wallet collaborator seam.
//!
//! Everything that touches keys, signatures or the chain lives behind the
//! [`Wallet`] trait; the gateway only authorizes, dispatches and relays.

use alloy_primitives::{Address, Bytes, TxHash, U256};
use serde::{Deserialize, Serialize};

/// An account exposed by the wallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccount {
    pub address: Address,
    pub name: String,
}

/// Transaction fields handed to the wallet for signing and submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
}

/// Fallback RPC metadata for a chain, from the wallet's configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcEndpoint {
    pub rpc_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_name: Option<String>,
}

/// Errors surfaced by the wallet collaborator. Messages are relayed to the
/// caller verbatim.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// The keystore is locked and cannot sign or disclose accounts.
    #[error("Wallet is locked")]
    Locked,
    /// The user rejected the request in the wallet UI.
    #[error("User rejected the request")]
    Rejected,
    /// The target chain is not known to the wallet.
    #[error("Unrecognized chain id {0}")]
    UnrecognizedChain(u64),
    /// Any other failure, relayed with its message.
    #[error("{0}")]
    Other(String),
}

/// The external signing/account/network subsystem the gateway delegates all
/// cryptographic and chain operations to.
#[async_trait::async_trait]
pub trait Wallet: Send + Sync {
    /// All accounts currently managed by the wallet.
    async fn accounts(&self) -> Result<Vec<WalletAccount>, WalletError>;

    /// Signs and submits a transaction, returning its hash.
    async fn send_transaction(&self, tx: WalletTransaction) -> Result<TxHash, WalletError>;

    /// Signs a personal message with the active account.
    async fn sign_message(&self, message: &str) -> Result<Bytes, WalletError>;

    /// Signs EIP-712 typed data with the given account.
    async fn sign_typed_data(
        &self,
        address: Address,
        typed_data: &serde_json::Value,
    ) -> Result<Bytes, WalletError>;

    /// Switches the active network.
    async fn switch_chain(&self, chain_id: u64) -> Result<(), WalletError>;

    /// Switches the active network using an explicit RPC endpoint.
    async fn switch_chain_with(
        &self,
        chain_id: u64,
        rpc: &RpcEndpoint,
    ) -> Result<(), WalletError>;

    /// Fallback RPC metadata for `chain_id`, if the wallet's configuration
    /// has any.
    fn fallback_rpc(&self, chain_id: u64) -> Option<RpcEndpoint>;

    /// The chain id of the active network.
    async fn chain_id(&self) -> Result<u64, WalletError>;

    /// Forwards an arbitrary RPC request to the wallet's node connection and
    /// returns its raw result.
    async fn request(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, WalletError>;
}
