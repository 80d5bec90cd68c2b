use super::{build_ledger, load_snapshot, read_csv, read_json, RecordViolation, SnapshotError};
use crate::storage::LedgerClient;

use std::io::Write;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use tempfile::{Builder, NamedTempFile, TempDir};

fn create_snapshot_file(suffix: &str, content: &str) -> Result<NamedTempFile> {
    let mut file = Builder::new().suffix(suffix).tempfile()?;
    write!(file, "{content}")?;
    Ok(file)
}

#[test]
fn test_missing_snapshot_yields_empty_ledger() -> Result<()> {
    let directory = TempDir::new()?;
    let ledger = load_snapshot(directory.path().join("accounts.json"))?;

    assert!(ledger.is_empty());

    Ok(())
}

#[test]
fn test_json_snapshot_loads_in_order_with_default_currency() -> Result<()> {
    let file = create_snapshot_file(".json", r#"[
        {"account_id": "A1", "owner_name": "Casey", "balance": 100.0},
        {"account_id": "B2", "owner_name": "Jordan", "balance": 20.5, "currency": "EUR", "branch": "ignored"}
    ]"#)?;

    let ledger = load_snapshot(file.path())?;
    let accounts = ledger.list_accounts();

    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].account_id, "A1");
    assert_eq!(accounts[0].currency, "USD");
    assert_eq!(accounts[0].display_balance(), "100.0");
    assert_eq!(accounts[1].currency, "EUR");
    assert_eq!(accounts[1].balance, Decimal::from_str("20.5")?);

    Ok(())
}

#[test]
fn test_csv_snapshot_loads_with_optional_currency() -> Result<()> {
    let file = create_snapshot_file(".csv", "account_id,owner_name,balance,currency\nA1, Casey ,100.0,\nB2,Jordan,0,GBP\n")?;

    let ledger = load_snapshot(file.path())?;
    let casey = ledger.get_account("A1").ok_or_else(|| anyhow!("A1 missing"))?;
    let jordan = ledger.get_account("B2").ok_or_else(|| anyhow!("B2 missing"))?;

    assert_eq!(casey.owner_name, "Casey");
    assert_eq!(casey.currency, "USD");
    assert_eq!(jordan.currency, "GBP");
    assert!(jordan.balance.is_zero());

    Ok(())
}

#[test]
fn test_negative_balance_aborts_load() -> Result<()> {
    let records = read_json(r#"[{"account_id": "A1", "owner_name": "Casey", "balance": -1}]"#.as_bytes())?;
    let result = build_ledger(records);

    assert!(matches!(
        result,
        Err(SnapshotError::InvalidRecord { index: 1, violation: RecordViolation::NegativeBalance { .. } })
    ));

    Ok(())
}

#[test]
fn test_duplicate_account_aborts_load() -> Result<()> {
    let records = read_csv("account_id,owner_name,balance\nA1,Casey,1\nB2,Jordan,2\nA1,Casey,3\n".as_bytes())?;
    let result = build_ledger(records);

    match result {
        Err(SnapshotError::InvalidRecord { index, violation }) => {
            assert_eq!(index, 3);
            assert_eq!(violation, RecordViolation::DuplicateAccount { account_id: "A1".to_string() });
        }
        other => return Err(anyhow!("expected duplicate account error, got {other:?}"))
    }

    Ok(())
}

#[test]
fn test_blank_identifiers_are_rejected() -> Result<()> {
    let blank_id = build_ledger(read_json(r#"[{"account_id": "  ", "owner_name": "Casey", "balance": 1}]"#.as_bytes())?);

    assert!(matches!(blank_id, Err(SnapshotError::InvalidRecord { violation: RecordViolation::BlankAccountId, .. })));

    Ok(())
}

#[test]
fn test_blank_currency_defaults_to_usd_in_every_format() -> Result<()> {
    let from_json = build_ledger(read_json(r#"[{"account_id": "A1", "owner_name": "Casey", "balance": 1, "currency": " "}]"#.as_bytes())?)?;
    let from_csv = build_ledger(read_csv("account_id,owner_name,balance,currency\nA1,Casey,1,\n".as_bytes())?)?;

    assert_eq!(from_json.get_account("A1").map(|account| account.currency), Some("USD".to_string()));
    assert_eq!(from_csv.get_account("A1").map(|account| account.currency), Some("USD".to_string()));

    Ok(())
}

#[test]
fn test_json_balances_keep_every_digit() -> Result<()> {
    let records = read_json(r#"[
        {"account_id": "A1", "owner_name": "Casey", "balance": 1234567890123.456789},
        {"account_id": "B2", "owner_name": "Jordan", "balance": "98765432109876.54321"}
    ]"#.as_bytes())?;

    assert_eq!(records[0].balance, Decimal::from_str("1234567890123.456789")?);
    assert_eq!(records[1].balance, Decimal::from_str("98765432109876.54321")?);

    Ok(())
}

#[test]
fn test_csv_balances_keep_every_digit() -> Result<()> {
    let records = read_csv("account_id,owner_name,balance\nA1,Casey,1234567890123.456789\n".as_bytes())?;
    let ledger = build_ledger(records)?;

    assert_eq!(ledger.get_account("A1").map(|account| account.display_balance()), Some("1234567890123.456789".to_string()));

    Ok(())
}

#[test]
fn test_malformed_json_fails_loudly() -> Result<()> {
    let file = create_snapshot_file(".json", r#"[{"account_id": "A1", "balance": 10}]"#)?;

    assert!(matches!(load_snapshot(file.path()), Err(SnapshotError::Json(_))));

    Ok(())
}

#[test]
fn test_malformed_csv_fails_loudly() -> Result<()> {
    let file = create_snapshot_file(".csv", "account_id,owner_name,balance\nA1,Casey,lots\n")?;

    assert!(matches!(
        load_snapshot(file.path()),
        Err(SnapshotError::InvalidRecord { index: 1, violation: RecordViolation::MalformedBalance { .. } })
    ));

    Ok(())
}

#[test]
fn test_csv_with_missing_columns_fails_loudly() -> Result<()> {
    let file = create_snapshot_file(".csv", "account_id,balance\nA1,10\n")?;

    assert!(matches!(load_snapshot(file.path()), Err(SnapshotError::Csv(_))));

    Ok(())
}
