//! Medical expense deduction.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::common::{floor_yen, format_yen};
use crate::models::Yen;
use crate::rates::{MEDICAL_DEDUCTION_CAP, MEDICAL_THRESHOLD_CAP, MEDICAL_THRESHOLD_RATE};

/// Medical expense deduction and the threshold subtracted to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalDeduction {
    pub deduction: Yen,

    /// The smaller of 100,000 and 5% of salary income.
    pub threshold: Yen,

    pub formula: String,
}

/// Computes the medical expense deduction.
///
/// `salary_income` is gross salary after the salary income deduction. When no
/// expenses were paid the deduction and the threshold are both zero.
pub fn medical_deduction(
    medical_expenses: Yen,
    salary_income: Decimal,
) -> MedicalDeduction {
    if medical_expenses <= 0 {
        return MedicalDeduction {
            deduction: 0,
            threshold: 0,
            formula: "medical expense deduction = 0 (no medical expenses paid)".to_string(),
        };
    }

    let threshold = floor_yen(salary_income * MEDICAL_THRESHOLD_RATE).min(MEDICAL_THRESHOLD_CAP);
    let deduction = (medical_expenses - threshold).max(0).min(MEDICAL_DEDUCTION_CAP);

    MedicalDeduction {
        deduction,
        threshold,
        formula: format!(
            "medical expense deduction = min({}, max(0, {} - {})) = {}",
            format_yen(MEDICAL_DEDUCTION_CAP),
            format_yen(medical_expenses),
            format_yen(threshold),
            format_yen(deduction),
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn no_expenses_short_circuits() {
        let result = medical_deduction(0, dec!(3797500));

        assert_eq!(result.deduction, 0);
        assert_eq!(result.threshold, 0);
    }

    #[test]
    fn negative_expenses_short_circuit() {
        let result = medical_deduction(-5_000, dec!(3797500));

        assert_eq!(result.deduction, 0);
        assert_eq!(result.threshold, 0);
    }

    #[test]
    fn threshold_capped_at_one_hundred_thousand() {
        // 5% of 3,797,500 is 189,875.
        let result = medical_deduction(300_000, dec!(3797500));

        assert_eq!(result.threshold, 100_000);
        assert_eq!(result.deduction, 200_000);
    }

    #[test]
    fn threshold_is_five_percent_of_low_income() {
        // 5% of 1,075,000 is 53,750.
        let result = medical_deduction(80_000, dec!(1075000));

        assert_eq!(result.threshold, 53_750);
        assert_eq!(result.deduction, 26_250);
    }

    #[test]
    fn threshold_floors_fractional_income() {
        let result = medical_deduction(10_000, dec!(600000.6));

        assert_eq!(result.threshold, 30_000);
    }

    #[test]
    fn expenses_below_threshold_give_zero() {
        let result = medical_deduction(80_000, dec!(3797500));

        assert_eq!(result.threshold, 100_000);
        assert_eq!(result.deduction, 0);
    }

    #[test]
    fn deduction_capped_at_two_million() {
        let result = medical_deduction(2_500_000, dec!(3797500));

        assert_eq!(result.deduction, 2_000_000);
    }

    #[test]
    fn formula_shows_threshold_and_result() {
        let result = medical_deduction(300_000, dec!(3797500));

        assert_eq!(
            result.formula,
            "medical expense deduction = min(2,000,000, max(0, 300,000 - 100,000)) = 200,000"
        );
    }
}
