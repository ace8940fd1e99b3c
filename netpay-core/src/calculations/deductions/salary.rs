//! Salary income deduction.
//!
//! The statutory deemed-expense deduction taken from gross salary before any
//! itemized deduction. It is piecewise linear in the salary:
//!
//! | Gross salary            | Deduction                    |
//! |-------------------------|------------------------------|
//! | up to 1,625,000         | 40%, at most 550,000         |
//! | up to 1,800,000         | 30% + 162,500                |
//! | up to 3,600,000         | 20% + 342,500                |
//! | up to 6,600,000         | 10% + 702,500                |
//! | up to 8,500,000         | 5% + 1,032,500               |
//! | above 8,500,000         | 1,950,000                    |
//!
//! The result is kept as an exact decimal. Whatever consumes it floors.

use rust_decimal::Decimal;

use crate::calculations::common::{floor_yen, format_rate, format_yen, to_decimal};
use crate::models::Yen;
use crate::rates::SALARY_DEDUCTION_SCHEDULE;

/// Salary income deduction for one gross salary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryDeduction {
    /// The deduction, unrounded.
    pub deduction: Decimal,

    /// Gross salary minus the deduction, unrounded.
    pub salary_income: Decimal,

    pub formula: String,
}

/// Computes the salary income deduction for `salary`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use netpay_core::calculations::deductions::salary_deduction;
///
/// let result = salary_deduction(1_000_000);
///
/// assert_eq!(result.deduction, dec!(400000));
/// assert_eq!(result.salary_income, dec!(600000));
/// ```
pub fn salary_deduction(salary: Yen) -> SalaryDeduction {
    let gross = to_decimal(salary);
    let bracket = SALARY_DEDUCTION_SCHEDULE.bracket_for(gross);
    let deduction = bracket.deduction_on(gross);

    let shown = format_yen(floor_yen(deduction));
    let formula = if SALARY_DEDUCTION_SCHEDULE.is_top(gross) {
        format!("salary income deduction = {shown} (ceiling)")
    } else if let Some(cap) = bracket.cap {
        format!(
            "salary income deduction = min({}, {} × {}) = {shown}",
            format_yen(floor_yen(cap)),
            format_yen(salary),
            format_rate(bracket.rate),
        )
    } else {
        format!(
            "salary income deduction = {} × {} + {} = {shown}",
            format_yen(salary),
            format_rate(bracket.rate),
            format_yen(floor_yen(bracket.offset)),
        )
    };

    SalaryDeduction {
        deduction,
        salary_income: gross - deduction,
        formula,
    }
}
