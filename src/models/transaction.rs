use rust_decimal::Decimal;

use crate::types::AccountId;

/// Description used when a transaction is recorded without one.
pub const DEFAULT_DESCRIPTION: &str = "Agent transaction";

/// A single balance adjustment requested against one account.
///
/// Positive amounts are deposits, negative amounts are withdrawals. Transactions
/// are not retained once applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The target account.
    pub account_id: AccountId,
    /// Signed amount to add to the balance.
    pub amount: Decimal,
    /// Free-form note, only used for logging.
    pub description: String
}

impl Transaction {
    pub fn new(account_id: impl Into<AccountId>, amount: Decimal, description: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            amount,
            description: description.into()
        }
    }
}
