//! Pay command - payer side of the QR flow
//!
//! Takes the scanned payload string, decodes it, asks for confirmation and
//! settles against the ledger.

use anyhow::Result;
use saldo_core::{LedgerEngine, PaymentRequest, SessionGate};
use std::path::Path;

use crate::ui;

pub fn run(storage_dir: &Path, payload: Option<String>, yes: bool) -> Result<()> {
    ui::header("Pay");

    let store = super::open_store(storage_dir);
    let gate = SessionGate::new(store.clone());
    let payer = super::require_login(&gate)?.into_account();

    let payload = match payload {
        Some(p) => p,
        None => ui::input("Scanned QR payload")?,
    };

    let request = PaymentRequest::decode(&payload)?;
    tracing::debug!(payee = %request.payee_id, amount = request.amount, "decoded payment request");
    if request.amount == 0 {
        anyhow::bail!("Payment request asks for a zero amount.");
    }

    ui::key_value("To", &request.payee_name);
    ui::key_value("Amount", &ui::amount(request.amount));
    ui::key_value("Your balance", &ui::amount(payer.balance));

    if !yes && !ui::confirm("Confirm payment?", false)? {
        ui::info("Payment cancelled.");
        return Ok(());
    }

    let ledger = LedgerEngine::new(store);
    let tx = ledger.settle(&payer.id, &request.payee_id, request.amount)?;

    ui::success("Payment successful!");
    ui::key_value("Transaction", &tx.id);
    if let Some(refreshed) = gate.refresh(&payer.id) {
        ui::key_value("New balance", &ui::amount(refreshed.balance));
    }
    Ok(())
}
