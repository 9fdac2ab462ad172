//! Payment request codec.
//!
//! The payee encodes a small payload (who to pay, how much) into the string
//! carried by the QR code; the payer decodes it and hands the triple to the
//! ledger engine. The wire form is self-describing JSON with camelCase field
//! names, so decoders stay forward-compatible with extra unknown fields.

use crate::errors::WalletError;
use crate::Result;
use serde::{Deserialize, Serialize};

/// The payload transported inside a payment QR code.
///
/// Transient: produced by the payee, consumed immediately by the settlement
/// call, never persisted. Amount positivity and payee existence are checked
/// by the settlement path, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Account id of the payee.
    pub payee_id: String,
    /// Display name shown on the payer's confirmation screen.
    #[serde(default)]
    pub payee_name: String,
    /// Requested amount in whole currency units.
    pub amount: u64,
}

impl PaymentRequest {
    pub fn new(
        payee_id: impl Into<String>,
        payee_name: impl Into<String>,
        amount: u64,
    ) -> Self {
        Self {
            payee_id: payee_id.into(),
            payee_name: payee_name.into(),
            amount,
        }
    }

    /// Serialize to the transport string embedded in the QR code.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a scanned transport string.
    ///
    /// Fails with [`WalletError::MalformedPayload`] when the string is not
    /// the expected JSON triple or `payeeId`/`amount` are missing.
    pub fn decode(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| WalletError::MalformedPayload(e.to_string()))
    }
}
