//! Housing loan tax credit.
//!
//! The credit is 1% of the year-end loan balance, at most 400,000. It is a
//! credit against tax owed rather than a deduction from income, and it is
//! spent in two stages: first against income tax, then whatever income tax
//! could not absorb is carried into resident tax up to 136,500.
//!
//! [`housing_loan_credit`] computes the nominal credit and the resident-tax
//! ceiling. [`HousingLoanCredit::resident_tax_share`] resolves the carry-over
//! once the income-tax side has been settled.

use serde::Serialize;

use crate::calculations::common::{floor_yen, format_rate, format_yen, to_decimal};
use crate::models::Yen;
use crate::rates::{HOUSING_LOAN_CREDIT_CAP, HOUSING_LOAN_CREDIT_RATE, HOUSING_LOAN_RESIDENT_TAX_CAP};

/// Nominal housing loan credit before it is allocated between the two taxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HousingLoanCredit {
    pub total: Yen,

    /// Credit offered to income tax. Income tax may absorb less than this.
    pub income_tax_side: Yen,

    /// Most that resident tax may absorb.
    pub resident_tax_ceiling: Yen,

    pub formula: String,
}

impl HousingLoanCredit {
    /// Credit carried into resident tax after income tax consumed
    /// `income_tax_used`.
    pub fn resident_tax_share(
        &self,
        income_tax_used: Yen,
    ) -> Yen {
        (self.total - income_tax_used)
            .max(0)
            .min(self.resident_tax_ceiling)
    }
}

/// The credit as finally allocated, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HousingLoanDeduction {
    pub total: Yen,

    /// Credit actually applied against income tax.
    pub income_tax: Yen,

    /// Credit carried into resident tax.
    pub resident_tax: Yen,

    pub formula: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HousingLoan {
    pub balance: Yen,
    pub deduction: HousingLoanDeduction,
}

/// Computes the nominal housing loan credit for a year-end `balance`.
pub fn housing_loan_credit(balance: Yen) -> HousingLoanCredit {
    if balance <= 0 {
        return HousingLoanCredit {
            total: 0,
            income_tax_side: 0,
            resident_tax_ceiling: 0,
            formula: "housing loan credit = 0 (no housing loan)".to_string(),
        };
    }

    let total = floor_yen(to_decimal(balance) * HOUSING_LOAN_CREDIT_RATE).min(HOUSING_LOAN_CREDIT_CAP);

    HousingLoanCredit {
        total,
        income_tax_side: total,
        resident_tax_ceiling: total.min(HOUSING_LOAN_RESIDENT_TAX_CAP),
        formula: format!(
            "housing loan credit = min({}, {} × {}) = {}",
            format_yen(HOUSING_LOAN_CREDIT_CAP),
            format_yen(balance),
            format_rate(HOUSING_LOAN_CREDIT_RATE),
            format_yen(total),
        ),
    }
}
