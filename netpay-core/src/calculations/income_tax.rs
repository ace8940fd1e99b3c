//! Income tax, including the reconstruction surtax and the housing credit.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::calculations::common::{floor_yen, format_rate, format_yen};
use crate::calculations::housing_loan::HousingLoanCredit;
use crate::calculations::taxable_base::DeductionStack;
use crate::models::Yen;
use crate::rates::{INCOME_TAX_BASIC_DEDUCTION, INCOME_TAX_SCHEDULE, RECONSTRUCTION_SURTAX_FACTOR};

/// Income tax owed and the figures behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeTax {
    pub taxable_base: Yen,
    pub rate: Decimal,
    pub subtraction: Yen,

    /// Bracket tax before the surtax.
    pub base_tax: Yen,

    /// Bracket tax with surtax, before the housing credit.
    pub tax_before_credit: Yen,

    /// Housing credit actually absorbed. Never exceeds `tax_before_credit`.
    pub credit_applied: Yen,

    pub tax: Yen,
    pub formula: String,
}

/// Computes income tax for a deduction stack.
///
/// The bracket tax is multiplied by the surtax factor and floored to whole
/// yen. The housing credit is then subtracted; any part that the tax cannot
/// absorb is left for resident tax.
pub fn income_tax(
    stack: &DeductionStack,
    credit: &HousingLoanCredit,
) -> IncomeTax {
    let taxable_base = stack.taxable_base(INCOME_TAX_BASIC_DEDUCTION);
    let bracket = INCOME_TAX_SCHEDULE.bracket_for(taxable_base);

    let base_tax = bracket.tax_on(taxable_base).max(Decimal::ZERO);
    let tax_before_credit = floor_yen(base_tax * RECONSTRUCTION_SURTAX_FACTOR);
    let credit_applied = credit.income_tax_side.clamp(0, tax_before_credit.max(0));
    let tax = (tax_before_credit - credit_applied).max(0);

    debug!(
        taxable_base = %taxable_base,
        rate = %bracket.rate,
        tax_before_credit,
        credit_applied,
        "Computed income tax"
    );

    let taxable_base = floor_yen(taxable_base);
    let subtraction = floor_yen(bracket.subtraction);

    IncomeTax {
        taxable_base,
        rate: bracket.rate,
        subtraction,
        base_tax: floor_yen(base_tax),
        tax_before_credit,
        credit_applied,
        tax,
        formula: format!(
            "income tax = ({} × {} - {}) × {} - {} = {}",
            format_yen(taxable_base),
            format_rate(bracket.rate),
            format_yen(subtraction),
            RECONSTRUCTION_SURTAX_FACTOR,
            format_yen(credit_applied),
            format_yen(tax),
        ),
    }
}
