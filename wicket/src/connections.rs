//! Live account-access tracking.

use parking_lot::RwLock;
use std::collections::HashSet;

/// Tracks which origins currently hold account access.
///
/// Membership only; an origin joins through a successful account disclosure
/// and leaves through disconnection or revocation. A disconnected origin
/// keeps receiving empty account lists rather than errors.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connected: RwLock<HashSet<String>>,
}

impl ConnectionRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `origin` as connected. Returns true if it was not before.
    pub fn connect(&self, origin: &str) -> bool {
        self.connected.write().insert(origin.to_string())
    }

    /// Removes `origin`. Returns true if it was connected.
    pub fn disconnect(&self, origin: &str) -> bool {
        self.connected.write().remove(origin)
    }

    /// Whether `origin` currently holds account access.
    pub fn is_connected(&self, origin: &str) -> bool {
        self.connected.read().contains(origin)
    }

    /// All connected origins, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut origins: Vec<_> = self.connected.read().iter().cloned().collect();
        origins.sort();
        origins
    }

    /// Removes every connection.
    pub fn clear_all(&self) {
        self.connected.write().clear();
    }
}
