//! JSON file storage for wallet data.
//!
//! One data file holds four named collections: accounts, transactions,
//! messages, and the session pointer. Each collection is loaded and replaced
//! as a whole; there are no partial updates. A missing or corrupt data file
//! is treated as an empty store, never as an error.
//!
//! # Security Warning
//!
//! This storage is **NOT suitable for production use**:
//! - No encryption at rest
//! - No concurrent access protection across processes
//! - No backup/recovery mechanisms
//!
//! The design assumes a single active process per storage directory.

use crate::errors::WalletError;
use crate::models::{Account, Message, Transaction};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File-backed store for accounts, transactions, messages and the session
/// pointer.
#[derive(Debug, Clone)]
pub struct WalletStore {
    storage_dir: PathBuf,
}

#[derive(Serialize, Deserialize, Default)]
struct StoreData {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    messages: Vec<Message>,
    session: Option<String>,
}

impl WalletStore {
    /// Create a store over the given directory.
    pub fn new(storage_dir: impl AsRef<Path>) -> Self {
        Self {
            storage_dir: storage_dir.as_ref().to_path_buf(),
        }
    }

    /// Create the storage directory if it does not exist yet.
    pub fn init(&self) -> Result<()> {
        std::fs::create_dir_all(&self.storage_dir)
            .map_err(|e| WalletError::Storage(format!("failed to create storage dir: {}", e)))?;
        Ok(())
    }

    /// Load the full account table. Empty when the store is missing or
    /// unreadable.
    pub fn load_accounts(&self) -> Vec<Account> {
        self.load_data().accounts
    }

    /// Replace the full account table.
    pub fn save_accounts(&self, accounts: Vec<Account>) -> Result<()> {
        let mut data = self.load_data();
        data.accounts = accounts;
        self.save_data(&data)
    }

    /// Load the full transaction table, in insertion order.
    pub fn load_transactions(&self) -> Vec<Transaction> {
        self.load_data().transactions
    }

    /// Replace the account table and append one transaction record in a
    /// single store write. This is the settlement atomicity boundary: no
    /// reader ever observes the balance mutation without its ledger entry.
    pub fn commit_settlement(&self, accounts: Vec<Account>, transaction: Transaction) -> Result<()> {
        let mut data = self.load_data();
        data.accounts = accounts;
        data.transactions.push(transaction);
        self.save_data(&data)
    }

    /// Load all inbox messages, in insertion order.
    pub fn load_messages(&self) -> Vec<Message> {
        self.load_data().messages
    }

    /// Replace the inbox message table.
    pub fn save_messages(&self, messages: Vec<Message>) -> Result<()> {
        let mut data = self.load_data();
        data.messages = messages;
        self.save_data(&data)
    }

    /// Read the session pointer: the currently authenticated account id.
    pub fn session(&self) -> Option<String> {
        self.load_data().session
    }

    /// Set or clear the session pointer.
    pub fn set_session(&self, session: Option<String>) -> Result<()> {
        let mut data = self.load_data();
        data.session = session;
        self.save_data(&data)
    }

    fn data_path(&self) -> PathBuf {
        self.storage_dir.join("saldo.json")
    }

    fn load_data(&self) -> StoreData {
        let path = self.data_path();
        if !path.exists() {
            return StoreData::default();
        }

        // Corrupt or unreadable data degrades to an empty store.
        match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                tracing::warn!("corrupt store at {:?}, starting empty: {}", path, e);
                StoreData::default()
            }),
            Err(e) => {
                tracing::warn!("unreadable store at {:?}, starting empty: {}", path, e);
                StoreData::default()
            }
        }
    }

    fn save_data(&self, data: &StoreData) -> Result<()> {
        self.init()?;
        let path = self.data_path();
        let json = serde_json::to_string_pretty(data)?;

        // Write-then-rename so a crash mid-write never leaves a truncated
        // data file behind.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .map_err(|e| WalletError::Storage(format!("failed to write {:?}: {}", tmp, e)))?;
        std::fs::rename(&tmp, &path)
            .map_err(|e| WalletError::Storage(format!("failed to replace {:?}: {}", path, e)))?;
        Ok(())
    }
}
