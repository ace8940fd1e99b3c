use netpay_core::Yen;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a whole-yen amount.
#[derive(Debug, Error)]
pub enum ParseYenError {
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount '{input}' has a fractional part; yen amounts are whole numbers")]
    Fractional { input: String },

    #[error("amount '{input}' is out of range")]
    OutOfRange { input: String },
}

/// Normalizes input for amount parsing: trims whitespace and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a whole-yen amount.
///
/// Handles comma as thousands separator (e.g. `"5,000,000"`).
/// Empty or whitespace-only input is treated as 0.
/// A trailing `.00` is accepted; any other fractional part is rejected.
pub fn parse_yen(s: &str) -> Result<Yen, ParseYenError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(0);
    }
    let amount: Decimal = normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseYenError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;
    if !amount.fract().is_zero() {
        return Err(ParseYenError::Fractional {
            input: s.to_string(),
        });
    }
    amount.to_i64().ok_or_else(|| ParseYenError::OutOfRange {
        input: s.to_string(),
    })
}
