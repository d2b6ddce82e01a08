use crate::{
    config::GatewayConfig,
    connections::ConnectionRegistry,
    permissions::{self, PermissionManager},
    provider::error::{GatewayError, Result, ToRpcResponseResult},
    pubsub::{ConnectionEvent, EventBus, RequestEvent},
    wallet::{Wallet, WalletTransaction},
};
use alloy_primitives::{Address, Bytes, TxHash};
use parking_lot::{Mutex, RwLock};
use std::{collections::HashMap, sync::Arc};
use tracing::{trace, warn};
use wicket_core::provider::{ProviderRequest, SenderContext, SwitchChainArgs, TransactionArgs};
use wicket_rpc::{
    error::RpcError,
    request::{Id, ProviderCall},
    response::{ResponseResult, RpcResponse},
};

/// The entry point for executing provider calls - the gateway between page
/// script and the wallet.
///
/// This type is cheap to clone and can be used concurrently
#[derive(Clone)]
pub struct ProviderApi {
    /// The signing/account/network collaborator
    wallet: Arc<dyn Wallet>,
    /// Per-origin authorization policy
    permissions: Arc<PermissionManager>,
    /// Origins currently holding account access
    connections: Arc<ConnectionRegistry>,
    /// Account/network/connection/audit fan-out
    events: Arc<EventBus>,
    /// Addresses from the last successful disclosure; `eth_accounts` reads
    /// this so it can never fail
    accounts: Arc<RwLock<Vec<Address>>>,
    /// Per-origin serialization locks
    locks: Arc<OriginLocks>,
}

// === impl ProviderApi ===

impl ProviderApi {
    /// Creates a new instance
    pub fn new(wallet: Arc<dyn Wallet>, config: GatewayConfig) -> Self {
        Self {
            wallet,
            permissions: Arc::new(PermissionManager::new(config.trusted_origins)),
            connections: Arc::new(ConnectionRegistry::new()),
            events: Arc::new(EventBus::new()),
            accounts: Arc::new(RwLock::new(Vec::new())),
            locks: Arc::new(OriginLocks::default()),
        }
    }

    /// Handles one inbound provider call and produces exactly one response.
    ///
    /// The audit hook fires first, regardless of outcome. Restricted methods
    /// are gated on the policy store before any handler runs; every handler
    /// failure is converted into the response `error` field here - nothing
    /// propagates to the caller.
    pub async fn handle(&self, call: ProviderCall, sender: SenderContext) -> RpcResponse {
        trace!(target: "provider", method = %call.method, "handling provider call");
        self.events
            .emit_provider_request(&RequestEvent { call: call.clone(), sender: sender.clone() });

        let id = call.id.clone().unwrap_or(Id::Null);
        let origin = sender.resolved_origin();

        // requests from one origin run one at a time; other origins are
        // unaffected
        let _serialized = match origin.as_deref() {
            Some(origin) => Some(self.locks.acquire(origin).await),
            None => None,
        };

        if permissions::is_restricted(&call.method)
            && !self.permissions.is_authorized(origin.as_deref(), &call.method)
        {
            warn!(target: "provider", method = %call.method, ?origin, "unauthorized provider call");
            return RpcResponse::new(id, RpcError::unauthorized());
        }

        let result = match ProviderRequest::parse(&call.method, call.params.into()) {
            Ok(request) => self.execute(origin.as_deref(), request).await,
            Err(err) => {
                warn!(target: "provider", method = %call.method, "failed to deserialize params: {err}");
                ResponseResult::error(RpcError::invalid_params(err.to_string()))
            }
        };
        trace!(target: "provider", "sending rpc result {result:?}");
        RpcResponse::new(id, result)
    }

    /// Executes the [ProviderRequest] and returns an rpc [ResponseResult]
    pub async fn execute(&self, origin: Option<&str>, request: ProviderRequest) -> ResponseResult {
        match request {
            ProviderRequest::RequestAccounts(()) => {
                self.request_accounts(origin).await.to_rpc_result()
            }
            ProviderRequest::Accounts(()) => self.account_list(origin).to_rpc_result(),
            ProviderRequest::SendTransaction([tx]) => {
                self.send_transaction(tx).await.to_rpc_result()
            }
            ProviderRequest::PersonalSign(message, address) => {
                self.sign_message(message, address).await.to_rpc_result()
            }
            ProviderRequest::SignTypedData(address, typed_data) => {
                self.sign_typed_data(address, typed_data).await.to_rpc_result()
            }
            ProviderRequest::SwitchChain([args]) => self.switch_chain(args).await.to_rpc_result(),
            ProviderRequest::ChainId(()) => self.chain_id().await.to_rpc_result(),
            ProviderRequest::NetVersion(()) => self.net_version().await.to_rpc_result(),
            ProviderRequest::Raw { method, params } => {
                self.forward(method, params).await.to_rpc_result()
            }
        }
    }

    /// Discloses the wallet's accounts to the requesting origin and
    /// registers the origin as connected.
    ///
    /// Consent for disclosure is collected upstream (the extension UI), so
    /// no explicit grant is required here; a grant is still needed for the
    /// restricted methods afterwards.
    ///
    /// Handler for provider call: `eth_requestAccounts`
    pub async fn request_accounts(&self, origin: Option<&str>) -> Result<Vec<Address>> {
        let accounts = self.wallet.accounts().await?;
        let addresses: Vec<Address> = accounts.iter().map(|account| account.address).collect();
        *self.accounts.write() = addresses.clone();

        if let Some(origin) = origin {
            if self.connections.connect(origin) {
                self.events.emit_connection_changed(&ConnectionEvent {
                    origin: origin.to_string(),
                    connected: true,
                });
            }
        }
        if let Some(first) = addresses.first() {
            self.events.emit_account_changed(first);
        }
        Ok(addresses)
    }

    /// Returns the disclosed account list if `origin` is connected, else an
    /// empty list. Never errors.
    ///
    /// Handler for provider call: `eth_accounts`
    pub fn account_list(&self, origin: Option<&str>) -> Result<Vec<Address>> {
        let connected = origin.is_some_and(|origin| self.connections.is_connected(origin));
        if connected {
            Ok(self.accounts.read().clone())
        } else {
            Ok(Vec::new())
        }
    }

    /// Submits a transaction via the wallet, returning its hash.
    ///
    /// Handler for provider call: `eth_sendTransaction`
    pub async fn send_transaction(&self, tx: TransactionArgs) -> Result<TxHash> {
        let TransactionArgs { to, value, gas, gas_price, data, .. } = tx;
        let hash = self
            .wallet
            .send_transaction(WalletTransaction { to, value, data, gas_limit: gas, gas_price })
            .await?;
        Ok(hash)
    }

    /// Signs a personal message. The address parameter is informational: a
    /// single active signer is assumed.
    ///
    /// Handler for provider call: `personal_sign`
    pub async fn sign_message(&self, message: String, _address: Address) -> Result<Bytes> {
        Ok(self.wallet.sign_message(&message).await?)
    }

    /// Signs EIP-712 typed data with the given account.
    ///
    /// Handler for provider call: `eth_signTypedData_v4`
    pub async fn sign_typed_data(
        &self,
        address: Address,
        typed_data: serde_json::Value,
    ) -> Result<Bytes> {
        Ok(self.wallet.sign_typed_data(address, &typed_data).await?)
    }

    /// Switches the active network, retrying once with the wallet's
    /// configured fallback RPC endpoint for the target chain.
    ///
    /// Handler for provider call: `wallet_switchEthereumChain`
    pub async fn switch_chain(&self, args: SwitchChainArgs) -> Result<()> {
        let chain_id = args
            .parse_chain_id()
            .ok_or_else(|| GatewayError::InvalidChainId(args.chain_id.clone()))?;

        if let Err(err) = self.wallet.switch_chain(chain_id).await {
            let Some(rpc) = self.wallet.fallback_rpc(chain_id) else {
                return Err(GatewayError::ChainSwitch(err.to_string()));
            };
            trace!(target: "provider", chain_id, rpc_url = %rpc.rpc_url, "retrying chain switch with fallback rpc");
            self.wallet
                .switch_chain_with(chain_id, &rpc)
                .await
                .map_err(|err| GatewayError::ChainSwitch(err.to_string()))?;
        }
        self.events.emit_network_changed(&chain_id);
        Ok(())
    }

    /// The active chain id as a `0x`-prefixed hex string.
    ///
    /// Handler for provider call: `eth_chainId`
    pub async fn chain_id(&self) -> Result<String> {
        let chain_id = self.wallet.chain_id().await?;
        Ok(format!("0x{chain_id:x}"))
    }

    /// The active chain id as a decimal string.
    ///
    /// Handler for provider call: `net_version`
    pub async fn net_version(&self) -> Result<String> {
        let chain_id = self.wallet.chain_id().await?;
        Ok(chain_id.to_string())
    }

    /// Forwards a method without a dedicated handler to the wallet and
    /// relays its result unchanged.
    ///
    /// Handler for any other provider call
    pub async fn forward(
        &self,
        method: String,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value> {
        Ok(self.wallet.request(&method, params).await?)
    }
}

// === impl ProviderApi admin surface ===

impl ProviderApi {
    /// Replaces `origin`'s grant. A `"*"` entry grants all methods.
    pub fn grant_permission<S: AsRef<str>>(&self, origin: &str, methods: &[S]) {
        self.permissions.grant(origin, methods);
    }

    /// Revokes `origin`'s grant and forces its disconnection.
    pub fn revoke_permission(&self, origin: &str) {
        self.permissions.revoke(origin);
        if self.connections.disconnect(origin) {
            self.events.emit_connection_changed(&ConnectionEvent {
                origin: origin.to_string(),
                connected: false,
            });
        }
    }

    /// Removes every grant and every connection.
    pub fn clear_all(&self) {
        self.permissions.clear_all();
        self.connections.clear_all();
    }

    /// The authorization policy store.
    pub fn permissions(&self) -> &PermissionManager {
        &self.permissions
    }

    /// The live connection registry.
    pub fn connections(&self) -> &ConnectionRegistry {
        &self.connections
    }

    /// The event fan-out.
    pub fn events(&self) -> &EventBus {
        &self.events
    }
}

/// Origin-keyed serialization: requests from one origin run one at a time
/// while different origins proceed independently.
#[derive(Default)]
struct OriginLocks {
    locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl OriginLocks {
    async fn acquire(&self, origin: &str) -> tokio::sync::OwnedMutexGuard<()> {
        let lock = self.locks.lock().entry(origin.to_string()).or_default().clone();
        lock.lock_owned().await
    }
}
