use crate::models::Transaction;
use crate::types::{format_amount, AccountId};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Account {account_id} not found.")]
    AccountNotFound {
        account_id: AccountId
    },
    #[error("Insufficient funds for this transaction. Account {account_id} has {}, requested {}.", rendered(.balance), rendered(.amount))]
    InsufficientFunds {
        account_id: AccountId,
        balance: Decimal,
        amount: Decimal
    },
    #[error("Numeric overflow occurred for account {account_id}.")]
    Overflow {
        account_id: AccountId
    }
}

impl LedgerError {
    pub fn account_not_found(tx: &Transaction) -> Self {
        Self::AccountNotFound { account_id: tx.account_id.clone() }
    }

    pub fn insufficient_funds(tx: &Transaction, balance: Decimal) -> Self {
        Self::InsufficientFunds {
            account_id: tx.account_id.clone(),
            balance,
            amount: tx.amount
        }
    }

    pub fn overflow(tx: &Transaction) -> Self {
        Self::Overflow { account_id: tx.account_id.clone() }
    }
}

fn rendered(amount: &Decimal) -> String {
    format_amount(*amount)
}
