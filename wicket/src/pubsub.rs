//! Provider event fan-out.
//!
//! An explicit mapping from event kind to subscriber list, one list per
//! kind. Emission is synchronous and in-process: within a single request,
//! emissions happen before that request's response is returned; no ordering
//! across kinds is implied.

use alloy_primitives::{Address, ChainId};
use parking_lot::Mutex;
use wicket_core::provider::SenderContext;
use wicket_rpc::request::ProviderCall;

type Subscribers<T> = Mutex<Vec<Box<dyn Fn(&T) + Send + Sync>>>;

/// A connection membership transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionEvent {
    pub origin: String,
    pub connected: bool,
}

/// Audit record for an inbound request; published for every request
/// regardless of outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestEvent {
    pub call: ProviderCall,
    pub sender: SenderContext,
}

/// Publish/subscribe surface for account, network, connection and audit
/// events.
#[derive(Default)]
pub struct EventBus {
    account_changed: Subscribers<Address>,
    network_changed: Subscribers<ChainId>,
    connection_changed: Subscribers<ConnectionEvent>,
    provider_request: Subscribers<RequestEvent>,
}

impl EventBus {
    /// Creates a new bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to active-account changes.
    pub fn on_account_changed(&self, subscriber: impl Fn(&Address) + Send + Sync + 'static) {
        self.account_changed.lock().push(Box::new(subscriber));
    }

    /// Subscribes to network (chain id) changes.
    pub fn on_network_changed(&self, subscriber: impl Fn(&ChainId) + Send + Sync + 'static) {
        self.network_changed.lock().push(Box::new(subscriber));
    }

    /// Subscribes to connection membership transitions.
    pub fn on_connection_changed(
        &self,
        subscriber: impl Fn(&ConnectionEvent) + Send + Sync + 'static,
    ) {
        self.connection_changed.lock().push(Box::new(subscriber));
    }

    /// Subscribes to the audit hook fired for every inbound request.
    pub fn on_provider_request(&self, subscriber: impl Fn(&RequestEvent) + Send + Sync + 'static) {
        self.provider_request.lock().push(Box::new(subscriber));
    }

    pub fn emit_account_changed(&self, address: &Address) {
        for subscriber in self.account_changed.lock().iter() {
            subscriber(address);
        }
    }

    pub fn emit_network_changed(&self, chain_id: &ChainId) {
        for subscriber in self.network_changed.lock().iter() {
            subscriber(chain_id);
        }
    }

    pub fn emit_connection_changed(&self, event: &ConnectionEvent) {
        for subscriber in self.connection_changed.lock().iter() {
            subscriber(event);
        }
    }

    pub fn emit_provider_request(&self, event: &RequestEvent) {
        for subscriber in self.provider_request.lock().iter() {
            subscriber(event);
        }
    }
}
