mod memory_ledger;

use crate::models::{Account, LedgerError, Transaction};

pub use memory_ledger::InMemoryLedger;

/// The operations the assistant needs from a core banking backend.
pub trait LedgerClient {
    fn list_accounts(&self) -> Vec<Account>;
    fn get_account(&self, account_id: &str) -> Option<Account>;
    fn record_transaction(&mut self, transaction: &Transaction) -> Result<Account, LedgerError>;
}

impl<T: LedgerClient + ?Sized> LedgerClient for &mut T {
    fn list_accounts(&self) -> Vec<Account> {
        (**self).list_accounts()
    }

    fn get_account(&self, account_id: &str) -> Option<Account> {
        (**self).get_account(account_id)
    }

    fn record_transaction(&mut self, transaction: &Transaction) -> Result<Account, LedgerError> {
        (**self).record_transaction(transaction)
    }
}
