mod errors;
mod loader;
mod record;
#[cfg(test)]
mod tests;

pub use errors::{RecordViolation, SnapshotError};
pub use loader::{build_ledger, load_snapshot, read_csv, read_json};
pub use record::SnapshotRecord;
