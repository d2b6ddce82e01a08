//! Per-origin authorization policy.

use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};

/// Grant sentinel meaning "all methods".
pub const WILDCARD: &str = "*";

/// Provider methods that require a trusted origin or an explicit grant.
///
/// `eth_requestAccounts` is deliberately absent: account disclosure is what
/// establishes access in the first place, and user consent for it is
/// collected upstream of this component.
pub const RESTRICTED_METHODS: &[&str] =
    &["eth_sendTransaction", "personal_sign", "eth_signTypedData_v4"];

/// Whether `method` requires per-origin authorization before it may run.
pub fn is_restricted(method: &str) -> bool {
    RESTRICTED_METHODS.contains(&method)
}

/// The methods an origin has been granted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Grant {
    /// Wildcard grant; subsumes any specific method
    All,
    /// An explicit method set
    Methods(HashSet<String>),
}

/// Sole policy decision point for whether an `(origin, method)` pair may
/// execute.
///
/// Holds no references to other gateway state and emits nothing; an
/// unauthorized outcome is a boolean for the caller, never an error.
#[derive(Debug, Default)]
pub struct PermissionManager {
    /// First-party origins exempt from explicit-grant checks
    trusted: HashSet<String>,
    grants: RwLock<HashMap<String, Grant>>,
}

impl PermissionManager {
    /// Creates a new instance with the injected trusted-origin list.
    pub fn new(trusted_origins: HashSet<String>) -> Self {
        Self { trusted: trusted_origins, grants: RwLock::new(HashMap::new()) }
    }

    /// Replaces the stored grant for `origin`. A [`WILDCARD`] entry makes
    /// the grant cover all methods.
    pub fn grant<S: AsRef<str>>(&self, origin: &str, methods: &[S]) {
        let grant = if methods.iter().any(|m| m.as_ref() == WILDCARD) {
            Grant::All
        } else {
            Grant::Methods(methods.iter().map(|m| m.as_ref().to_string()).collect())
        };
        self.grants.write().insert(origin.to_string(), grant);
    }

    /// Deletes the grant for `origin`. Returns true if one was present.
    ///
    /// The forced disconnection that accompanies a revocation is enforced by
    /// the gateway's admin surface, which owns both this store and the
    /// connection registry.
    pub fn revoke(&self, origin: &str) -> bool {
        self.grants.write().remove(origin).is_some()
    }

    /// Whether `origin` may execute `method`.
    ///
    /// Methods outside [`RESTRICTED_METHODS`] are always authorized; their
    /// results are scoped by connection state instead. For restricted
    /// methods the origin must be trusted, hold a wildcard grant, or hold a
    /// grant containing the method.
    pub fn is_authorized(&self, origin: Option<&str>, method: &str) -> bool {
        if !is_restricted(method) {
            return true;
        }
        let Some(origin) = origin else { return false };
        if self.trusted.contains(origin) {
            return true;
        }
        match self.grants.read().get(origin) {
            Some(Grant::All) => true,
            Some(Grant::Methods(methods)) => methods.contains(method),
            None => false,
        }
    }

    /// Whether `origin` is on the injected trusted list.
    pub fn is_trusted(&self, origin: &str) -> bool {
        self.trusted.contains(origin)
    }

    /// The grant stored for `origin`.
    pub fn granted(&self, origin: &str) -> Option<Grant> {
        self.grants.read().get(origin).cloned()
    }

    /// All origins holding a grant, sorted.
    pub fn origins(&self) -> Vec<String> {
        let mut origins: Vec<_> = self.grants.read().keys().cloned().collect();
        origins.sort();
        origins
    }

    /// Removes every grant.
    pub fn clear_all(&self) {
        self.grants.write().clear();
    }
}
