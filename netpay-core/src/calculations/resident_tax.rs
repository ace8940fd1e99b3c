//! Resident tax (prefectural plus municipal).

use serde::Serialize;
use tracing::debug;

use crate::calculations::common::{floor_yen, format_rate, format_yen};
use crate::calculations::housing_loan::HousingLoanCredit;
use crate::calculations::taxable_base::DeductionStack;
use crate::models::Yen;
use crate::rates::{RESIDENT_TAX_BASIC_DEDUCTION, RESIDENT_TAX_PER_CAPITA_LEVY, RESIDENT_TAX_RATE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentTax {
    pub taxable_base: Yen,

    /// Flat-rate tax plus the per-capita levy.
    pub tax_before_credit: Yen,

    /// Housing credit carried over from income tax.
    pub credit: Yen,

    pub tax: Yen,
    pub formula: String,
}

/// Computes resident tax for a deduction stack.
///
/// `income_tax_credit_applied` is the housing credit income tax actually
/// absorbed; only the remainder, up to the resident-tax ceiling, is
/// subtracted here.
pub fn resident_tax(
    stack: &DeductionStack,
    credit: &HousingLoanCredit,
    income_tax_credit_applied: Yen,
) -> ResidentTax {
    let taxable_base = stack.taxable_base(RESIDENT_TAX_BASIC_DEDUCTION);
    let tax_before_credit = floor_yen(taxable_base * RESIDENT_TAX_RATE + RESIDENT_TAX_PER_CAPITA_LEVY);
    let carried = credit.resident_tax_share(income_tax_credit_applied);
    let tax = (tax_before_credit - carried).max(0);

    debug!(
        taxable_base = %taxable_base,
        tax_before_credit,
        carried,
        "Computed resident tax"
    );

    let taxable_base = floor_yen(taxable_base);

    ResidentTax {
        taxable_base,
        tax_before_credit,
        credit: carried,
        tax,
        formula: format!(
            "resident tax = {} × {} + {} - {} = {}",
            format_yen(taxable_base),
            format_rate(RESIDENT_TAX_RATE),
            format_yen(floor_yen(RESIDENT_TAX_PER_CAPITA_LEVY)),
            format_yen(carried),
            format_yen(tax),
        ),
    }
}
