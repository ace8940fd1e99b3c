//! Common utility functions for the deduction and tax calculations.
//!
//! This module provides the rounding and formatting helpers shared by every
//! calculator: conversion between whole yen and exact decimals, and the
//! number formatting used in explanatory formula strings.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::Yen;

/// Rounds a decimal value down to whole yen.
///
/// Statutory amounts are truncated toward negative infinity, never rounded to
/// nearest. Values outside the `i64` range saturate.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use netpay_core::calculations::common::floor_yen;
///
/// assert_eq!(floor_yen(dec!(400000.4)), 400000);
/// assert_eq!(floor_yen(dec!(-0.5)), -1);
/// ```
pub fn floor_yen(value: Decimal) -> Yen {
    let floored = value.floor();
    floored.to_i64().unwrap_or(if floored.is_sign_negative() {
        Yen::MIN
    } else {
        Yen::MAX
    })
}

/// Lifts a whole-yen amount into decimal arithmetic.
pub fn to_decimal(amount: Yen) -> Decimal {
    Decimal::from(amount)
}

/// Formats a yen amount with comma thousands separators.
///
/// # Examples
///
/// ```
/// use netpay_core::calculations::common::format_yen;
///
/// assert_eq!(format_yen(1234567), "1,234,567");
/// assert_eq!(format_yen(-5000), "-5,000");
/// ```
pub fn format_yen(amount: Yen) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        formatted.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

/// Formats a fractional rate as a percentage, e.g. `0.04905` → `4.905%`.
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // floor_yen tests
    // =========================================================================

    #[test]
    fn floor_yen_truncates_fraction() {
        assert_eq!(floor_yen(dec!(123.99)), 123);
    }

    #[test]
    fn floor_yen_preserves_whole_values() {
        assert_eq!(floor_yen(dec!(550000)), 550_000);
        assert_eq!(floor_yen(dec!(550000.000)), 550_000);
    }

    #[test]
    fn floor_yen_rounds_negative_values_down() {
        assert_eq!(floor_yen(dec!(-123.01)), -124);
    }

    #[test]
    fn floor_yen_saturates_out_of_range() {
        assert_eq!(floor_yen(Decimal::MAX), Yen::MAX);
        assert_eq!(floor_yen(Decimal::MIN), Yen::MIN);
    }

    // =========================================================================
    // format_yen tests
    // =========================================================================

    #[test]
    fn format_yen_groups_thousands() {
        assert_eq!(format_yen(0), "0");
        assert_eq!(format_yen(999), "999");
        assert_eq!(format_yen(1000), "1,000");
        assert_eq!(format_yen(123456), "123,456");
        assert_eq!(format_yen(1950000), "1,950,000");
    }

    #[test]
    fn format_yen_handles_negative_values() {
        assert_eq!(format_yen(-1234), "-1,234");
        assert_eq!(format_yen(Yen::MIN), "-9,223,372,036,854,775,808");
    }

    // =========================================================================
    // format_rate tests
    // =========================================================================

    #[test]
    fn format_rate_drops_trailing_zeros() {
        assert_eq!(format_rate(dec!(0.40)), "40%");
        assert_eq!(format_rate(dec!(0.04905)), "4.905%");
        assert_eq!(format_rate(dec!(0.009)), "0.9%");
    }
}
