//! Administrator inbox.
//!
//! Any authenticated non-administrator can post; the administrator reads.
//! Role enforcement happens in the calling layer.

use crate::errors::WalletError;
use crate::models::Message;
use crate::store::WalletStore;
use crate::Result;

/// Message posting and retrieval over the persistent store.
#[derive(Debug, Clone)]
pub struct Inbox {
    store: WalletStore,
}

impl Inbox {
    pub fn new(store: WalletStore) -> Self {
        Self { store }
    }

    /// Append a new message. Messages are created unread.
    pub fn post(
        &self,
        sender_id: impl Into<String>,
        sender_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Message> {
        let message = Message::new(sender_id, sender_name, content);
        let mut messages = self.store.load_messages();
        messages.push(message.clone());
        self.store.save_messages(messages)?;
        Ok(message)
    }

    /// All messages, newest first.
    pub fn list_all(&self) -> Vec<Message> {
        let mut messages = self.store.load_messages();
        messages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        messages
    }

    /// Flip one message's unread flag.
    pub fn mark_read(&self, id: &str) -> Result<()> {
        let mut messages = self.store.load_messages();
        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| WalletError::MessageNotFound(id.to_string()))?;
        message.is_read = true;
        self.store.save_messages(messages)
    }
}
