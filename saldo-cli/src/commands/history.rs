//! History command - ordered settlement history for the logged-in account

use anyhow::Result;
use saldo_core::{LedgerEngine, SessionGate};
use std::path::Path;

use crate::ui;

pub fn run(storage_dir: &Path) -> Result<()> {
    ui::header("Transaction History");

    let store = super::open_store(storage_dir);
    let gate = SessionGate::new(store.clone());
    let account = super::require_login(&gate)?.into_account();

    let ledger = LedgerEngine::new(store);
    let history = ledger.history(&account.id);

    if history.is_empty() {
        ui::info("No transactions yet.");
        return Ok(());
    }

    for tx in &history {
        let direction = if tx.payer_id == account.id {
            format!("→ {}", tx.payee_name)
        } else {
            format!("← {}", tx.payer_name)
        };
        println!("  {:<28} {:>16}  {}", direction, ui::amount(tx.amount), tx.id);
    }
    ui::separator();
    ui::info(&format!("{} transaction(s)", history.len()));
    Ok(())
}
