use std::io;
use std::path::Path;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::AccountId;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot error: unable to read [{path}] | {source}")]
    Io {
        path: String,
        source: io::Error
    },
    #[error("Snapshot error: malformed JSON | {0}")]
    Json(#[from] serde_json::Error),
    #[error("Snapshot error: malformed CSV | {0}")]
    Csv(#[from] csv::Error),
    #[error("Snapshot error: invalid record #{index} | {violation}")]
    InvalidRecord {
        index: usize,
        violation: RecordViolation
    }
}

/// The reason a snapshot record cannot become an account.
#[derive(Debug, Error, PartialEq)]
pub enum RecordViolation {
    #[error("account_id is blank")]
    BlankAccountId,
    #[error("account [{account_id}] has a negative balance {balance}")]
    NegativeBalance {
        account_id: AccountId,
        balance: Decimal
    },
    #[error("balance [{value}] is not a decimal number")]
    MalformedBalance {
        value: String
    },
    #[error("account [{account_id}] appears more than once")]
    DuplicateAccount {
        account_id: AccountId
    }
}

impl SnapshotError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source
        }
    }

    pub fn invalid_record(index: usize, violation: RecordViolation) -> Self {
        Self::InvalidRecord { index, violation }
    }
}
