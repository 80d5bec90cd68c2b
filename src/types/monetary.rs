use crate::types::errors::MonetaryError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a signed amount as typed on the command line.
///
/// Accepts plain decimals (`50`, `-200`, `+12.5`) and scientific notation (`1e3`).
pub fn parse_amount(value: &str) -> Result<Decimal, MonetaryError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
    }

    if value.contains(['e', 'E']) {
        return Ok(Decimal::from_scientific(value)?);
    }

    if value.starts_with('.') || value.starts_with("-.") || value.starts_with("+.") {
        return Err(MonetaryError::InvalidFormat("Value has no integer part".to_string()));
    }

    if value.matches('.').count() > 1 {
        return Err(MonetaryError::InvalidFormat("Value has more than one decimal point".to_string()));
    }

    Ok(Decimal::from_str(value)?)
}

/// Renders an amount with trailing zeros stripped but at least one fractional digit.
pub fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();

    if normalized.scale() == 0 {
        format!("{normalized}.0")
    } else {
        normalized.to_string()
    }
}
