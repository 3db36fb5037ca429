//! Shared authentication session cell.

use std::sync::{Arc, RwLock};

use catalog_core::roles::ROLE_ADMIN;

/// Identity held for the duration of a login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub token: String,
    pub username: String,
    pub role: String,
}

/// Thread-safe holder for the current identity.
///
/// The cell is updated at exactly three points: login stores an
/// identity, logout clears it, and a 401 response clears it (the token
/// is no longer usable, so keeping it would only repeat the failure).
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<Identity>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fresh identity after a successful login.
    pub fn set(&self, identity: Identity) {
        *self.inner.write().expect("session lock poisoned") = Some(identity);
    }

    /// Drop the identity (logout or 401 interception).
    pub fn clear(&self) {
        *self.inner.write().expect("session lock poisoned") = None;
    }

    /// The bearer token, if logged in.
    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|identity| identity.token.clone())
    }

    /// Snapshot of the current identity.
    pub fn identity(&self) -> Option<Identity> {
        self.inner.read().expect("session lock poisoned").clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.read().expect("session lock poisoned").is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .is_some_and(|identity| identity.role == ROLE_ADMIN)
    }
}
