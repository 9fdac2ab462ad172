//! Saldo CLI
//!
//! Command-line surface for the Saldo wallet simulation: register accounts,
//! produce and pay QR payment requests, inspect history, and administer the
//! directory. All business rules live in saldo-core; this binary only parses
//! arguments, prompts, and prints.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use saldo_core::{EducationTier, Role};

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "saldo")]
#[command(about = "Saldo - peer-to-peer wallet simulation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Custom storage directory
    #[arg(long, global = true)]
    storage_dir: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Payer,
    Payee,
    Administrator,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Payer => Role::Payer,
            RoleArg::Payee => Role::Payee,
            RoleArg::Administrator => Role::Administrator,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EducationArg {
    Primary,
    JuniorSecondary,
    SeniorSecondary,
    Diploma,
    Degree,
}

impl From<EducationArg> for EducationTier {
    fn from(arg: EducationArg) -> Self {
        match arg {
            EducationArg::Primary => EducationTier::Primary,
            EducationArg::JuniorSecondary => EducationTier::JuniorSecondary,
            EducationArg::SeniorSecondary => EducationTier::SeniorSecondary,
            EducationArg::Diploma => EducationTier::Diploma,
            EducationArg::Degree => EducationTier::Degree,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account (and log in)
    Register {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Email (login identifier, unique)
        #[arg(short, long)]
        email: Option<String>,

        /// Account role
        #[arg(short, long, value_enum, default_value = "payer")]
        role: RoleArg,

        /// Education tier (informational)
        #[arg(long, value_enum, default_value = "degree")]
        education: EducationArg,
    },

    /// Log in by email or username
    Login {
        /// Email or username (prompted when omitted)
        identifier: Option<String>,
    },

    /// Log out
    Logout,

    /// Show the current account
    Whoami,

    /// Generate a payment request QR code (payee side)
    Request {
        /// Requested amount in whole units
        amount: u64,
    },

    /// Pay a scanned payment request (payer side)
    Pay {
        /// The scanned QR payload (prompted when omitted)
        payload: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show settlement history for the current account
    History,

    /// Administrator inbox
    Inbox {
        #[command(subcommand)]
        action: InboxAction,
    },

    /// Administrative overrides
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum InboxAction {
    /// Send a message to the administrator
    Post {
        /// Message text (prompted when omitted)
        message: Option<String>,
    },

    /// List all messages, newest first (administrator only)
    List,

    /// Mark a message as read (administrator only)
    Read {
        /// Message id
        id: String,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// List all registered accounts
    List,

    /// Remove an account
    Remove {
        /// Account id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Set an account's balance directly
    SetBalance {
        /// Account id
        id: String,

        /// New balance in whole units
        balance: u64,
    },

    /// Set an account's role directly
    SetRole {
        /// Account id
        id: String,

        /// New role
        #[arg(value_enum)]
        role: RoleArg,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("saldo_cli=debug,saldo_core=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("saldo_cli=info,saldo_core=warn")
            .init();
    }

    // Setup storage directory
    let storage_dir = if let Some(dir) = cli.storage_dir {
        std::path::PathBuf::from(dir)
    } else {
        dirs::data_local_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("saldo")
    };

    // Failure messages are shown to the user verbatim.
    if let Err(e) = run(cli.command, &storage_dir) {
        ui::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(command: Commands, storage_dir: &std::path::Path) -> Result<()> {
    match command {
        Commands::Register {
            name,
            email,
            role,
            education,
        } => {
            commands::auth::register(storage_dir, name, email, role.into(), education.into())?;
        }
        Commands::Login { identifier } => {
            commands::auth::login(storage_dir, identifier)?;
        }
        Commands::Logout => {
            commands::auth::logout(storage_dir)?;
        }
        Commands::Whoami => {
            commands::auth::whoami(storage_dir)?;
        }
        Commands::Request { amount } => {
            commands::request::run(storage_dir, amount)?;
        }
        Commands::Pay { payload, yes } => {
            commands::pay::run(storage_dir, payload, yes)?;
        }
        Commands::History => {
            commands::history::run(storage_dir)?;
        }
        Commands::Inbox { action } => match action {
            InboxAction::Post { message } => {
                commands::inbox::post(storage_dir, message)?;
            }
            InboxAction::List => {
                commands::inbox::list(storage_dir)?;
            }
            InboxAction::Read { id } => {
                commands::inbox::mark_read(storage_dir, &id)?;
            }
        },
        Commands::Admin { action } => match action {
            AdminAction::List => {
                commands::admin::list(storage_dir)?;
            }
            AdminAction::Remove { id, yes } => {
                commands::admin::remove(storage_dir, &id, yes)?;
            }
            AdminAction::SetBalance { id, balance } => {
                commands::admin::set_balance(storage_dir, &id, balance)?;
            }
            AdminAction::SetRole { id, role } => {
                commands::admin::set_role(storage_dir, &id, role.into())?;
            }
        },
    }

    Ok(())
}
