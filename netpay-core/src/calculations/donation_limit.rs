//! Hometown-tax donation limit estimate.
//!
//! A closed-form approximation of the donation amount that can be fully
//! credited back against income and resident tax. It is not the statutory
//! credit computation.

use serde::Serialize;

use crate::calculations::common::{floor_yen, format_rate, format_yen};
use crate::calculations::taxable_base::DeductionStack;
use crate::models::Yen;
use crate::rates::{
    DONATION_INCOME_TAX_FACTOR, DONATION_MULTIPLIER, DONATION_RESIDENT_TAX_FACTOR,
    INCOME_TAX_BASIC_DEDUCTION, RESIDENT_TAX_BASIC_DEDUCTION,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationLimit {
    pub limit: Yen,
    pub income_tax_base: Yen,
    pub resident_tax_base: Yen,
    pub formula: String,
}

/// Estimates the donation limit.
///
/// Both bases are rebuilt from `stack` without the income adjustment
/// deduction, using the income-tax and resident-tax basic deductions
/// respectively.
pub fn donation_limit(stack: &DeductionStack) -> DonationLimit {
    let stack = stack.without_income_adjustment();
    let income_tax_base = stack.taxable_base(INCOME_TAX_BASIC_DEDUCTION);
    let resident_tax_base = stack.taxable_base(RESIDENT_TAX_BASIC_DEDUCTION);

    let limit = floor_yen(
        (income_tax_base * DONATION_INCOME_TAX_FACTOR + resident_tax_base * DONATION_RESIDENT_TAX_FACTOR)
            * DONATION_MULTIPLIER,
    );

    let income_tax_base = floor_yen(income_tax_base);
    let resident_tax_base = floor_yen(resident_tax_base);

    DonationLimit {
        limit,
        income_tax_base,
        resident_tax_base,
        formula: format!(
            "donation limit = (income tax base {} × {} + resident tax base {} × {}) × {} = {}",
            format_yen(income_tax_base),
            format_rate(DONATION_INCOME_TAX_FACTOR),
            format_yen(resident_tax_base),
            format_rate(DONATION_RESIDENT_TAX_FACTOR),
            DONATION_MULTIPLIER,
            format_yen(limit),
        ),
    }
}
