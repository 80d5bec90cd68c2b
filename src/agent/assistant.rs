use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::agent::ConversationContext;
use crate::models::{Account, Transaction};
use crate::storage::LedgerClient;

const GREETING: &str = "Hello! I'm your banking assistant. How can I help you today?";
const NO_ACCOUNTS: &str = "No accounts available.";
const ACCOUNT_LIST_SUMMARY: &str = "Displayed account list.";

/// A lightweight agent that guides bankers through common ledger actions.
///
/// Every intent appends exactly one entry to the conversation context and writes
/// its rendering to `output`. Ledger failures become messages; only failures of
/// the output sink are returned as errors.
pub struct Assistant<L, W> {
    ledger: L,
    output: W,
    context: ConversationContext
}

impl<L: LedgerClient, W: Write> Assistant<L, W> {
    pub fn new(ledger: L, output: W) -> Self {
        Self {
            ledger,
            output,
            context: ConversationContext::new()
        }
    }

    pub fn greet(&mut self) -> io::Result<String> {
        self.respond(GREETING.to_string())
    }

    /// Writes one line per account followed by a summary line.
    pub fn show_accounts(&mut self) -> io::Result<Vec<Account>> {
        let accounts = self.ledger.list_accounts();

        if accounts.is_empty() {
            self.respond(NO_ACCOUNTS.to_string())?;
            return Ok(accounts)
        }

        for account in &accounts {
            writeln!(self.output, "{}: {} - {} {}", account.account_id, account.owner_name, account.display_balance(), account.currency)?;
        }

        self.respond(ACCOUNT_LIST_SUMMARY.to_string())?;
        debug!("Listed {} account(s)", accounts.len());

        Ok(accounts)
    }

    pub fn describe_account(&mut self, account_id: &str) -> io::Result<String> {
        let message = match self.ledger.get_account(account_id) {
            Some(account) => format!(
                "Account {} belongs to {} with a balance of {} {}.",
                account.account_id, account.owner_name, account.display_balance(), account.currency
            ),
            None => {
                debug!("Describe requested for unknown account [{account_id}]");
                format!("Account {account_id} not found.")
            }
        };

        self.respond(message)
    }

    pub fn process_transaction(&mut self, transaction: &Transaction) -> io::Result<String> {
        let message = match self.ledger.record_transaction(transaction) {
            Ok(account) => {
                info!("Recorded {} against account [{}]", transaction.amount, account.account_id);
                format!(
                    "Recorded transaction for account {}. New balance: {} {}.",
                    account.account_id, account.display_balance(), account.currency
                )
            }
            Err(error) => {
                warn!("{error}");
                error.to_string()
            }
        };

        self.respond(message)
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn respond(&mut self, message: String) -> io::Result<String> {
        self.context.add(message.clone());
        writeln!(self.output, "{message}")?;
        self.output.flush()?;
        Ok(message)
    }
}
