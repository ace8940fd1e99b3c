//! Input checks applied before an estimate is handed to the engine.

use netpay_core::NetIncomeInput;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must not be negative")]
    NegativeAmount { field: &'static str },
}

/// Rejects an input holding any negative amount, naming the first offending
/// field.
pub fn validate(input: &NetIncomeInput) -> Result<(), InputError> {
    match input.negative_fields().first().copied() {
        Some(field) => Err(InputError::NegativeAmount { field }),
        None => Ok(()),
    }
}
