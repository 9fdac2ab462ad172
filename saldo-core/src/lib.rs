//! Saldo Core Library
//!
//! Ledger and payment-settlement core for a peer-to-peer wallet simulation:
//! persistent store, account directory, ledger engine, payment-request codec
//! and session gate. The CLI (and any other surface) only talks to the types
//! re-exported here.
//!
//! This simulates value transfer for research purposes; there is no real
//! currency and no cryptographic signing of transactions.

pub mod directory;
pub mod errors;
pub mod inbox;
pub mod ledger;
pub mod models;
pub mod request;
pub mod session;
pub mod store;

pub use directory::{AccountDirectory, NewAccount, Principal, PAYER_STARTING_BALANCE};
pub use errors::WalletError;
pub use inbox::Inbox;
pub use ledger::LedgerEngine;
pub use models::{Account, EducationTier, Message, Role, Transaction};
pub use request::PaymentRequest;
pub use session::SessionGate;
pub use store::WalletStore;

/// Result type for wallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;
