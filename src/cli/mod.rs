
use std::io::{stdout, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;
use tracing::level_filters::LevelFilter;

use crate::agent::Assistant;
use crate::models::{Transaction, DEFAULT_DESCRIPTION};
use crate::snapshot::load_snapshot;
use crate::types::parse_amount;

pub const DEFAULT_SNAPSHOT_PATH: &str = "data/accounts.json";

/// Bank Agent CLI to interact with the core banking mock.
#[derive(Debug, Parser)]
#[command(name = "bank-agent")]
#[command(about = "Bank Agent CLI to interact with the core banking mock")]
#[command(version)]
pub struct Cli {
    /// Account snapshot used to seed the ledger (JSON, or CSV by file extension)
    #[arg(long, global = true, env = "BANK_AGENT_SNAPSHOT", default_value = DEFAULT_SNAPSHOT_PATH)]
    pub snapshot: PathBuf,

    /// Log level written to stderr: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "error")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Send a greeting from the agent
    Greet,

    /// List all accounts
    List,

    /// Describe a specific account
    Describe {
        /// Target account id
        account_id: String,
    },

    /// Record a transaction against an account
    Transact {
        /// Target account id
        account_id: String,

        /// Positive for deposit, negative for withdrawal
        #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
        amount: Decimal,

        /// Transaction note
        #[arg(short, long, default_value = DEFAULT_DESCRIPTION)]
        description: String,
    },
}

impl Cli {
    /// Runs the selected intent against the process stdout.
    pub fn run(self) -> Result<()> {
        let output = stdout();
        self.run_with(output.lock())
    }

    /// Loads the snapshot and runs the selected intent, writing the conversation to `output`.
    ///
    /// Only snapshot and output failures are errors; ledger rejections are reported as text.
    pub fn run_with<W: Write>(self, output: W) -> Result<()> {
        let mut ledger = load_snapshot(&self.snapshot)
            .with_context(|| format!("Failed to load snapshot [{}]", self.snapshot.display()))?;

        let mut assistant = Assistant::new(&mut ledger, output);

        match self.command {
            Commands::Greet => {
                assistant.greet()?;
            }
            Commands::List => {
                assistant.show_accounts()?;
            }
            Commands::Describe { account_id } => {
                assistant.describe_account(&account_id)?;
            }
            Commands::Transact { account_id, amount, description } => {
                let transaction = Transaction::new(account_id, amount, description);
                assistant.process_transaction(&transaction)?;
            }
        }

        debug!("Session finished with {} context message(s)", assistant.context().len());

        Ok(())
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
