//! CLI command implementations

pub mod admin;
pub mod auth;
pub mod history;
pub mod inbox;
pub mod pay;
pub mod request;

use anyhow::Result;
use saldo_core::{Principal, SessionGate, WalletStore};
use std::path::Path;

/// Open the wallet store under the storage directory.
pub fn open_store(storage_dir: &Path) -> WalletStore {
    WalletStore::new(storage_dir)
}

/// Resolve the logged-in principal, or fail with a hint.
pub fn require_login(gate: &SessionGate) -> Result<Principal> {
    gate.current_account()
        .ok_or_else(|| anyhow::anyhow!("Not logged in. Run 'saldo login' or 'saldo register' first."))
}

/// Resolve the logged-in principal and insist it is an administrator.
pub fn require_admin(gate: &SessionGate) -> Result<Principal> {
    let principal = require_login(gate)?;
    if !principal.is_administrator() {
        anyhow::bail!("This command requires an administrator login.");
    }
    Ok(principal)
}
