mod account;
mod errors;
mod transaction;

pub use account::Account;
pub use errors::LedgerError;
pub use transaction::{Transaction, DEFAULT_DESCRIPTION};
