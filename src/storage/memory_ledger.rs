use crate::models::{Account, LedgerError, Transaction};
use crate::storage::LedgerClient;
use crate::types::AccountId;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, warn};

/// In-memory mock of a core banking system.
///
/// Accounts are keyed by id; `order` remembers insertion order so listings
/// follow the snapshot.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    accounts: HashMap<AccountId, Account>,
    order: Vec<AccountId>
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an account. A replaced account keeps its listing position.
    pub fn insert(&mut self, account: Account) -> Option<Account> {
        let account_id = account.account_id.clone();
        let previous = self.accounts.insert(account_id.clone(), account);

        if previous.is_none() {
            self.order.push(account_id);
        }

        previous
    }

    pub fn contains(&self, account_id: &str) -> bool {
        self.accounts.contains_key(account_id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<Account> for InMemoryLedger {
    fn from_iter<I: IntoIterator<Item = Account>>(accounts: I) -> Self {
        let mut ledger = Self::new();

        for account in accounts {
            ledger.insert(account);
        }

        ledger
    }
}

impl LedgerClient for InMemoryLedger {
    fn list_accounts(&self) -> Vec<Account> {
        self.order.iter()
            .filter_map(|account_id| self.accounts.get(account_id))
            .cloned()
            .collect()
    }

    fn get_account(&self, account_id: &str) -> Option<Account> {
        self.accounts.get(account_id).cloned()
    }

    /// Applies a signed amount to the referenced account.
    ///
    /// # Errors
    /// Returns `LedgerError` if:
    /// - The account does not exist.
    /// - The resulting balance would be negative.
    /// - The addition overflows.
    ///
    /// The store is left untouched on every error.
    fn record_transaction(&mut self, transaction: &Transaction) -> Result<Account, LedgerError> {
        let Some(account) = self.accounts.get(&transaction.account_id) else {
            warn!("Transaction against unknown account [{}]", transaction.account_id);
            return Err(LedgerError::account_not_found(transaction))
        };

        let new_balance = account.balance.checked_add(transaction.amount)
            .ok_or_else(|| LedgerError::overflow(transaction))?;

        if new_balance < Decimal::ZERO {
            warn!("Rejected [{}] for account [{}]: balance {} would become {}", transaction.description, transaction.account_id, account.balance, new_balance);
            return Err(LedgerError::insufficient_funds(transaction, account.balance))
        }

        let updated = account.with_balance(new_balance);
        self.accounts.insert(transaction.account_id.clone(), updated.clone());

        debug!("Transaction [{}] of {} for account [{}] recorded, balance now {}", transaction.description, transaction.amount, transaction.account_id, updated.balance);

        Ok(updated)
    }
}
