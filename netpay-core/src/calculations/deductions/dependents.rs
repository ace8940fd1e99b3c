//! Spouse and dependent deductions.

use serde::Serialize;

use crate::calculations::common::format_yen;
use crate::models::{Dependents, Yen};
use crate::rates::{
    ELDERLY_DEPENDENT_DEDUCTION, GENERAL_DEPENDENT_DEDUCTION, SPECIFIC_DEPENDENT_DEDUCTION,
    SPOUSE_DEDUCTION, SPOUSE_INCOME_LIMIT,
};

/// Spouse and dependent deductions, per category and combined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependentDeduction {
    pub spouse: Yen,
    pub elderly: Yen,
    pub specific: Yen,
    pub general: Yen,
    pub total: Yen,
    pub formula: String,
}

/// Computes the dependent deductions for a household.
///
/// The spouse deduction is all or nothing: it applies in full when the spouse
/// qualifies and earns no more than 480,000, and not at all otherwise.
/// Per-head amounts are not limited by count.
pub fn dependent_deduction(dependents: &Dependents) -> DependentDeduction {
    let spouse = if dependents.spouse_qualifies && dependents.spouse_income <= SPOUSE_INCOME_LIMIT {
        SPOUSE_DEDUCTION
    } else {
        0
    };
    let elderly = Yen::from(dependents.elderly) * ELDERLY_DEPENDENT_DEDUCTION;
    let specific = Yen::from(dependents.specific) * SPECIFIC_DEPENDENT_DEDUCTION;
    let general = Yen::from(dependents.general) * GENERAL_DEPENDENT_DEDUCTION;
    let total = spouse + elderly + specific + general;

    DependentDeduction {
        spouse,
        elderly,
        specific,
        general,
        total,
        formula: format!(
            "dependent deduction = spouse {} + elderly {} × {} + specific {} × {} + general {} × {} = {}",
            format_yen(spouse),
            dependents.elderly,
            format_yen(ELDERLY_DEPENDENT_DEDUCTION),
            dependents.specific,
            format_yen(SPECIFIC_DEPENDENT_DEDUCTION),
            dependents.general,
            format_yen(GENERAL_DEPENDENT_DEDUCTION),
            format_yen(total),
        ),
    }
}
