mod errors;
mod monetary;

pub use errors::MonetaryError;
pub use monetary::{format_amount, parse_amount};

pub type AccountId = String;

pub const DEFAULT_CURRENCY: &str = "USD";
