use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use crate::models::Account;
use crate::snapshot::errors::{RecordViolation, SnapshotError};
use crate::snapshot::record::{CsvSnapshotRow, SnapshotRecord};
use crate::storage::InMemoryLedger;

/// Loads an account snapshot into a fresh ledger.
///
/// A missing file yields an empty ledger. Files ending in `.csv` are read as CSV,
/// anything else as a JSON array. A blank currency means `USD` in both formats.
/// Every record is validated before insertion and the first invalid one aborts the load.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<InMemoryLedger, SnapshotError> {
    let path = path.as_ref();

    if !path.exists() {
        info!("No snapshot found at [{}], starting with an empty ledger", path.display());
        return Ok(InMemoryLedger::new())
    }

    let file = File::open(path).map_err(|error| SnapshotError::io(path, error))?;
    let reader = BufReader::new(file);

    let is_csv = path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));

    let records = if is_csv { read_csv(reader)? } else { read_json(reader)? };
    let ledger = build_ledger(records)?;

    info!("Loaded {} account(s) from [{}]", ledger.len(), path.display());

    Ok(ledger)
}

pub fn read_json<R: Read>(reader: R) -> Result<Vec<SnapshotRecord>, SnapshotError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<SnapshotRecord>, SnapshotError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    //NOTE: Unlike a transaction feed, a bad snapshot row is fatal rather than skipped
    reader.deserialize::<CsvSnapshotRow>()
        .enumerate()
        .map(|(position, row)| {
            SnapshotRecord::try_from(row?)
                .map_err(|violation| SnapshotError::invalid_record(position + 1, violation))
        })
        .collect()
}

/// Validates records in order and inserts them into a new ledger.
pub fn build_ledger(records: Vec<SnapshotRecord>) -> Result<InMemoryLedger, SnapshotError> {
    let mut ledger = InMemoryLedger::new();

    for (position, record) in records.into_iter().enumerate() {
        let index = position + 1;
        let account = Account::try_from(record)
            .map_err(|violation| SnapshotError::invalid_record(index, violation))?;

        if ledger.contains(&account.account_id) {
            return Err(SnapshotError::invalid_record(index, RecordViolation::DuplicateAccount {
                account_id: account.account_id
            }))
        }

        debug!("Snapshot record #{index} loaded as account [{}]", account.account_id);
        ledger.insert(account);
    }

    Ok(ledger)
}
