use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Account;
use crate::snapshot::errors::RecordViolation;
use crate::types::{parse_amount, AccountId, DEFAULT_CURRENCY};

/// One raw account entry as it appears in a snapshot file.
///
/// JSON balances may be numbers or strings; either way every digit is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotRecord {
    pub account_id: AccountId,
    pub owner_name: String,
    #[serde(deserialize_with = "rust_decimal::serde::arbitrary_precision::deserialize")]
    pub balance: Decimal,
    #[serde(default)]
    pub currency: Option<String>
}

/// A CSV row with the balance kept as its original text.
///
/// The csv deserializer infers numeric cells as `f64`, so the balance is parsed here instead.
#[derive(Debug, Deserialize)]
pub(crate) struct CsvSnapshotRow {
    account_id: AccountId,
    owner_name: String,
    balance: String,
    #[serde(default)]
    currency: Option<String>
}

impl TryFrom<CsvSnapshotRow> for SnapshotRecord {
    type Error = RecordViolation;

    fn try_from(row: CsvSnapshotRow) -> Result<Self, Self::Error> {
        let balance = parse_amount(&row.balance)
            .map_err(|_| RecordViolation::MalformedBalance { value: row.balance.clone() })?;

        Ok(Self {
            account_id: row.account_id,
            owner_name: row.owner_name,
            balance,
            currency: row.currency
        })
    }
}

impl TryFrom<SnapshotRecord> for Account {
    type Error = RecordViolation;

    /// A missing or blank currency falls back to `USD`, whatever the snapshot format.
    fn try_from(record: SnapshotRecord) -> Result<Self, Self::Error> {
        if record.account_id.trim().is_empty() {
            return Err(RecordViolation::BlankAccountId)
        }

        if record.balance < Decimal::ZERO {
            return Err(RecordViolation::NegativeBalance {
                account_id: record.account_id,
                balance: record.balance
            })
        }

        let currency = match record.currency {
            Some(currency) if !currency.trim().is_empty() => currency,
            _ => DEFAULT_CURRENCY.to_string()
        };

        Ok(Account::new(record.account_id, record.owner_name, record.balance).with_currency(currency))
    }
}
