//! Data models for the wallet simulation.
//!
//! # Models
//!
//! - [`Account`] - balance-bearing identity record
//! - [`Transaction`] - immutable record of one completed settlement
//! - [`Message`] - inbox entry readable by the administrator
//!
//! Balances and amounts are whole minor-unit-free integers (e.g. whole
//! Rupiah); no fractional arithmetic happens anywhere in the core.

use serde::{Deserialize, Serialize};

/// Role tag attached to every account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Sends payments; registered with a nonzero starting balance.
    Payer,
    /// Receives payments; starts at zero.
    Payee,
    /// Audits and overrides account state.
    Administrator,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Payer => write!(f, "payer"),
            Role::Payee => write!(f, "payee"),
            Role::Administrator => write!(f, "administrator"),
        }
    }
}

/// Informational education tier. Not behaviorally significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationTier {
    Primary,
    JuniorSecondary,
    SeniorSecondary,
    Diploma,
    Degree,
}

/// A registered account in the directory.
///
/// The password is stored as an opaque plain string and compared by exact
/// equality at login. A production port must introduce a credential-hashing
/// boundary without changing the `Result` contract of the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique opaque id (uuid v4).
    pub id: String,
    /// Display name. Also usable as a login identifier.
    pub name: String,
    /// Login identifier; unique across the directory at registration time.
    pub email: String,
    /// Stored secret, plain form.
    pub password: String,
    /// Role tag.
    pub role: Role,
    /// Informational attribute.
    pub education: EducationTier,
    /// Non-negative balance in whole currency units.
    pub balance: u64,
}

/// Immutable record of one completed settlement.
///
/// Payer and payee names are snapshotted at settlement time, not live-joined,
/// so history stays readable after an account is renamed or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction id.
    pub id: String,
    pub payer_id: String,
    pub payer_name: String,
    pub payee_id: String,
    pub payee_name: String,
    /// Settled amount, always positive.
    pub amount: u64,
    /// Wall-clock milliseconds; sort key and uniqueness tiebreak.
    pub timestamp: i64,
}

impl Transaction {
    /// Build a settlement record with a fresh id and the current timestamp.
    pub fn new(payer: &Account, payee: &Account, amount: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            payer_id: payer.id.clone(),
            payer_name: payer.name.clone(),
            payee_id: payee.id.clone(),
            payee_name: payee.name.clone(),
            amount,
            timestamp: current_timestamp_ms(),
        }
    }

    /// Whether the given account participated in this settlement.
    pub fn involves(&self, account_id: &str) -> bool {
        self.payer_id == account_id || self.payee_id == account_id
    }
}

/// An inbox message addressed to the administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub content: String,
    /// Wall-clock milliseconds.
    pub timestamp: i64,
    /// Created false; flipped by [`crate::Inbox::mark_read`].
    pub is_read: bool,
}

impl Message {
    pub fn new(
        sender_id: impl Into<String>,
        sender_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender_id: sender_id.into(),
            sender_name: sender_name.into(),
            content: content.into(),
            timestamp: current_timestamp_ms(),
            is_read: false,
        }
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn current_timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
