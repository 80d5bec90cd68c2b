pub mod agent;
pub mod cli;
pub mod models;
pub mod snapshot;
pub mod storage;
pub mod types;

pub use agent::{Assistant, ConversationContext};
pub use models::{Account, LedgerError, Transaction};
pub use storage::{InMemoryLedger, LedgerClient};
