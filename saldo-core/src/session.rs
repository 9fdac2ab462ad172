//! Session/auth gate.
//!
//! Thin layer over the account directory that owns the "who is logged in"
//! question. One process-wide pointer, no token expiry, no multi-session.

use crate::directory::{AccountDirectory, NewAccount, Principal};
use crate::models::Account;
use crate::store::WalletStore;
use crate::Result;

/// The single entry point the surrounding UI uses for authentication.
#[derive(Debug, Clone)]
pub struct SessionGate {
    directory: AccountDirectory,
}

impl SessionGate {
    pub fn new(store: WalletStore) -> Self {
        Self {
            directory: AccountDirectory::new(store),
        }
    }

    /// Register a new account; the session pointer ends up on it.
    pub fn register(&self, candidate: NewAccount) -> Result<Account> {
        self.directory.register(candidate)
    }

    /// Authenticate and point the session at the matched principal.
    pub fn login(&self, identifier: &str, secret: &str) -> Result<Principal> {
        self.directory.authenticate(identifier, secret)
    }

    /// Clear the session pointer.
    pub fn logout(&self) -> Result<()> {
        self.directory.clear_session()
    }

    /// The currently authenticated principal, if any.
    pub fn current_account(&self) -> Option<Principal> {
        self.directory.current_account()
    }

    /// Re-read one account's state, e.g. to pick up a fresh balance.
    pub fn refresh(&self, id: &str) -> Option<Account> {
        self.directory.refresh(id)
    }
}
