//! Registration, login and session commands

use anyhow::Result;
use saldo_core::{EducationTier, NewAccount, Role, SessionGate};
use std::path::Path;

use crate::ui;

pub fn register(
    storage_dir: &Path,
    name: Option<String>,
    email: Option<String>,
    role: Role,
    education: EducationTier,
) -> Result<()> {
    ui::header("Register");

    let gate = SessionGate::new(super::open_store(storage_dir));

    let name = match name {
        Some(n) => n,
        None => ui::input("Display name")?,
    };
    let email = match email {
        Some(e) => e,
        None => ui::input("Email")?,
    };
    let password = ui::password("Password")?;

    let account = gate.register(NewAccount {
        name,
        email,
        password,
        role,
        education,
    })?;

    ui::success("Registration successful. You are now logged in.");
    ui::key_value("Account", &account.name);
    ui::key_value("Role", &account.role.to_string());
    ui::key_value("Balance", &ui::amount(account.balance));
    Ok(())
}

pub fn login(storage_dir: &Path, identifier: Option<String>) -> Result<()> {
    ui::header("Login");

    let gate = SessionGate::new(super::open_store(storage_dir));

    let identifier = match identifier {
        Some(i) => i,
        None => ui::input("Email or username")?,
    };
    let secret = ui::password("Password")?;

    let account = gate.login(&identifier, &secret)?.into_account();

    ui::success(&format!("Logged in as {}", account.name));
    ui::key_value("Role", &account.role.to_string());
    if account.role != Role::Administrator {
        ui::key_value("Balance", &ui::amount(account.balance));
    }
    Ok(())
}

pub fn logout(storage_dir: &Path) -> Result<()> {
    let gate = SessionGate::new(super::open_store(storage_dir));
    gate.logout()?;
    ui::success("Logged out.");
    Ok(())
}

pub fn whoami(storage_dir: &Path) -> Result<()> {
    let gate = SessionGate::new(super::open_store(storage_dir));

    match gate.current_account() {
        Some(principal) => {
            // Re-read so a settlement done elsewhere shows up here.
            let account = principal.account();
            let account = gate.refresh(&account.id).unwrap_or(account);

            ui::header("Current Account");
            ui::key_value("Name", &account.name);
            ui::key_value("Email", &account.email);
            ui::key_value("Role", &account.role.to_string());
            ui::key_value("Balance", &ui::amount(account.balance));
        }
        None => ui::info("Not logged in."),
    }
    Ok(())
}
