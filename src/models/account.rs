use rust_decimal::Decimal;

use crate::types::{format_amount, AccountId, DEFAULT_CURRENCY};

/// A simplified bank account record.
///
/// Accounts are treated as values: a committed transaction replaces the stored
/// record with a new one from [`Account::with_balance`] instead of mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The unique identifier of the account.
    pub account_id: AccountId,
    /// Name of the account holder.
    pub owner_name: String,
    /// Current balance, never negative.
    pub balance: Decimal,
    /// ISO currency code, `USD` unless the snapshot says otherwise.
    pub currency: String
}

impl Account {
    /// Creates an account in the default currency.
    pub fn new(account_id: impl Into<AccountId>, owner_name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            account_id: account_id.into(),
            owner_name: owner_name.into(),
            balance,
            currency: DEFAULT_CURRENCY.to_string()
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Returns a copy of this account carrying `balance`; every other field is kept.
    pub fn with_balance(&self, balance: Decimal) -> Self {
        Self {
            balance,
            ..self.clone()
        }
    }

    /// The balance rendered for display, e.g. `150.0`.
    pub fn display_balance(&self) -> String {
        format_amount(self.balance)
    }
}
