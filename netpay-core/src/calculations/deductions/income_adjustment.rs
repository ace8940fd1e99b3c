//! Income adjustment deduction for high earners with a qualifying condition.

use serde::Serialize;

use crate::calculations::common::{floor_yen, format_rate, format_yen, to_decimal};
use crate::models::Yen;
use crate::rates::{INCOME_ADJUSTMENT_RATE, INCOME_ADJUSTMENT_THRESHOLD};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeAdjustmentDeduction {
    pub deduction: Yen,
    pub formula: String,
}

/// Computes the income adjustment deduction.
///
/// Only salaries above 8,500,000 with the special condition set qualify; there
/// is no partial amount below the threshold.
pub fn income_adjustment_deduction(
    salary: Yen,
    has_special_condition: bool,
) -> IncomeAdjustmentDeduction {
    if !has_special_condition || salary <= INCOME_ADJUSTMENT_THRESHOLD {
        return IncomeAdjustmentDeduction {
            deduction: 0,
            formula: "income adjustment deduction = 0 (not eligible)".to_string(),
        };
    }

    let excess = salary - INCOME_ADJUSTMENT_THRESHOLD;
    let deduction = floor_yen(to_decimal(excess) * INCOME_ADJUSTMENT_RATE);

    IncomeAdjustmentDeduction {
        deduction,
        formula: format!(
            "income adjustment deduction = ({} - {}) × {} = {}",
            format_yen(salary),
            format_yen(INCOME_ADJUSTMENT_THRESHOLD),
            format_rate(INCOME_ADJUSTMENT_RATE),
            format_yen(deduction),
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ten_percent_of_excess_when_eligible() {
        let result = income_adjustment_deduction(9_000_000, true);

        assert_eq!(result.deduction, 50_000);
        assert_eq!(
            result.formula,
            "income adjustment deduction = (9,000,000 - 8,500,000) × 10% = 50,000"
        );
    }

    #[test]
    fn floors_fractional_result() {
        assert_eq!(income_adjustment_deduction(8_500_015, true).deduction, 1);
    }

    #[test]
    fn zero_at_threshold() {
        assert_eq!(income_adjustment_deduction(8_500_000, true).deduction, 0);
    }

    #[test]
    fn zero_below_threshold_even_with_condition() {
        assert_eq!(income_adjustment_deduction(8_000_000, true).deduction, 0);
    }

    #[test]
    fn zero_without_condition() {
        assert_eq!(income_adjustment_deduction(12_000_000, false).deduction, 0);
    }
}
