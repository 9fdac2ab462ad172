//! Inbox commands - message posting and the administrator's inbox view

use anyhow::Result;
use saldo_core::{Inbox, SessionGate};
use std::path::Path;

use crate::ui;

/// Post a message to the administrator inbox.
pub fn post(storage_dir: &Path, message: Option<String>) -> Result<()> {
    let store = super::open_store(storage_dir);
    let gate = SessionGate::new(store.clone());
    let sender = super::require_login(&gate)?;

    if sender.is_administrator() {
        anyhow::bail!("The administrator cannot post to their own inbox.");
    }
    let sender = sender.into_account();

    let content = match message {
        Some(m) => m,
        None => ui::input("Message")?,
    };

    let inbox = Inbox::new(store);
    inbox.post(&sender.id, &sender.name, &content)?;
    ui::success("Message sent.");
    Ok(())
}

/// List all inbox messages, newest first. Administrator only.
pub fn list(storage_dir: &Path) -> Result<()> {
    ui::header("Inbox");

    let store = super::open_store(storage_dir);
    let gate = SessionGate::new(store.clone());
    super::require_admin(&gate)?;

    let inbox = Inbox::new(store);
    let messages = inbox.list_all();

    if messages.is_empty() {
        ui::info("Inbox is empty.");
        return Ok(());
    }

    for msg in &messages {
        let marker = if msg.is_read { " " } else { "*" };
        println!(
            "  {} [{}] {} — {}",
            marker,
            format_timestamp(msg.timestamp),
            msg.sender_name,
            msg.content
        );
        println!("      id: {}", msg.id);
    }
    Ok(())
}

/// Mark a message as read. Administrator only.
pub fn mark_read(storage_dir: &Path, id: &str) -> Result<()> {
    let store = super::open_store(storage_dir);
    let gate = SessionGate::new(store.clone());
    super::require_admin(&gate)?;

    Inbox::new(store).mark_read(id)?;
    ui::success("Marked as read.");
    Ok(())
}

/// Render a millisecond timestamp as a date-time, falling back to the raw
/// value when out of range.
fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}
