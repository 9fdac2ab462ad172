//! Request command - payee side of the QR flow

use anyhow::Result;
use saldo_core::{PaymentRequest, SessionGate};
use std::path::Path;

use crate::ui;

/// Generate a payment request QR code for the logged-in payee.
pub fn run(storage_dir: &Path, amount: u64) -> Result<()> {
    ui::header("Payment Request QR Code");

    if amount == 0 {
        anyhow::bail!("Amount must be greater than zero.");
    }

    let gate = SessionGate::new(super::open_store(storage_dir));
    let payee = super::require_login(&gate)?.into_account();

    let payload = PaymentRequest::new(&payee.id, &payee.name, amount).encode()?;

    ui::key_value("Payee", &payee.name);
    ui::key_value("Amount", &ui::amount(amount));
    ui::key_value("Payload", &payload);

    ui::qr_code(&payload)?;

    ui::separator();
    ui::info("Show this QR code to the payer.");
    Ok(())
}
