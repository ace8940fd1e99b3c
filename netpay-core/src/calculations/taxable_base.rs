//! Taxable base construction shared by both taxes and the donation estimate.

use rust_decimal::Decimal;

use crate::calculations::common::to_decimal;
use crate::models::Yen;

/// Salary income together with every deduction that reduces it.
///
/// Income tax and resident tax build their bases from the same stack and
/// differ only in the basic deduction passed to [`DeductionStack::taxable_base`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeductionStack {
    /// Gross salary after the salary income deduction, unrounded.
    pub salary_income: Decimal,
    pub income_adjustment: Yen,
    pub medical: Yen,
    pub life_insurance: Yen,
    pub earthquake_insurance: Yen,
    pub dependents: Yen,
}

impl DeductionStack {
    /// Sum of every deduction in the stack.
    pub fn total_deductions(&self) -> Yen {
        self.income_adjustment
            + self.medical
            + self.life_insurance
            + self.earthquake_insurance
            + self.dependents
    }

    /// Salary income less `basic_deduction` and every stacked deduction,
    /// never below zero.
    pub fn taxable_base(
        &self,
        basic_deduction: Decimal,
    ) -> Decimal {
        (self.salary_income - basic_deduction - to_decimal(self.total_deductions()))
            .max(Decimal::ZERO)
    }

    /// The same stack without the income adjustment deduction.
    pub fn without_income_adjustment(self) -> Self {
        Self {
            income_adjustment: 0,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn stack() -> DeductionStack {
        DeductionStack {
            salary_income: dec!(3797500),
            income_adjustment: 0,
            medical: 200_000,
            life_insurance: 87_500,
            earthquake_insurance: 20_000,
            dependents: 760_000,
        }
    }

    #[test]
    fn total_deductions_sums_every_entry() {
        let stack = DeductionStack {
            income_adjustment: 50_000,
            ..stack()
        };

        assert_eq!(stack.total_deductions(), 1_117_500);
    }

    #[test]
    fn taxable_base_subtracts_basic_and_stacked_deductions() {
        assert_eq!(stack().taxable_base(dec!(480000)), dec!(2250000));
        assert_eq!(stack().taxable_base(dec!(430000)), dec!(2300000));
    }

    #[test]
    fn taxable_base_never_negative() {
        let stack = DeductionStack {
            salary_income: dec!(600000),
            ..stack()
        };

        assert_eq!(stack.taxable_base(dec!(480000)), Decimal::ZERO);
    }

    #[test]
    fn taxable_base_keeps_fraction() {
        let stack = DeductionStack {
            salary_income: dec!(1000000.6),
            ..Default::default()
        };

        assert_eq!(stack.taxable_base(dec!(480000)), dec!(520000.6));
    }

    #[test]
    fn without_income_adjustment_clears_only_adjustment() {
        let stack = DeductionStack {
            income_adjustment: 50_000,
            ..stack()
        };

        let stripped = stack.without_income_adjustment();

        assert_eq!(stripped.income_adjustment, 0);
        assert_eq!(stripped.medical, stack.medical);
        assert_eq!(stripped.salary_income, stack.salary_income);
    }
}
