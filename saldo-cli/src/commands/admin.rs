//! Administrative override commands

use anyhow::Result;
use saldo_core::{AccountDirectory, Role, SessionGate};
use std::path::Path;

use crate::ui;

pub fn list(storage_dir: &Path) -> Result<()> {
    ui::header("Accounts");

    let store = super::open_store(storage_dir);
    let gate = SessionGate::new(store.clone());
    super::require_admin(&gate)?;

    let directory = AccountDirectory::new(store);
    let accounts = directory.list_all();

    if accounts.is_empty() {
        ui::info("No registered accounts.");
        return Ok(());
    }

    for account in &accounts {
        println!(
            "  {:<20} {:<14} {:>16}  {}",
            account.name,
            account.role.to_string(),
            ui::amount(account.balance),
            account.id
        );
    }
    ui::separator();
    ui::info(&format!("{} account(s)", accounts.len()));
    Ok(())
}

pub fn remove(storage_dir: &Path, id: &str, yes: bool) -> Result<()> {
    let store = super::open_store(storage_dir);
    let gate = SessionGate::new(store.clone());
    super::require_admin(&gate)?;

    if !yes && !ui::confirm(&format!("Remove account {}?", id), false)? {
        ui::info("Cancelled.");
        return Ok(());
    }

    AccountDirectory::new(store).remove(id)?;
    ui::success("Account removed.");
    Ok(())
}

pub fn set_balance(storage_dir: &Path, id: &str, balance: u64) -> Result<()> {
    let store = super::open_store(storage_dir);
    let gate = SessionGate::new(store.clone());
    super::require_admin(&gate)?;

    AccountDirectory::new(store).set_balance(id, balance)?;
    ui::success(&format!("Balance set to {}.", ui::amount(balance)));
    Ok(())
}

pub fn set_role(storage_dir: &Path, id: &str, role: Role) -> Result<()> {
    let store = super::open_store(storage_dir);
    let gate = SessionGate::new(store.clone());
    super::require_admin(&gate)?;

    AccountDirectory::new(store).set_role(id, role)?;
    ui::success(&format!("Role set to {}.", role));
    Ok(())
}
