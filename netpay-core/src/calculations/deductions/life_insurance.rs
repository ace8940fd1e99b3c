//! Life insurance premium deduction.
//!
//! Each of the three categories (general, medical, individual pension) is
//! deducted on the same tiered scale and capped at 40,000. The three results
//! are then summed and capped at 120,000.

use serde::Serialize;

use crate::calculations::common::{floor_yen, format_yen, to_decimal};
use crate::models::Yen;
use crate::rates::{LIFE_INSURANCE_SCHEDULE, LIFE_INSURANCE_TOTAL_CAP};

/// Life insurance deduction, per category and combined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeInsuranceDeduction {
    pub general_deduction: Yen,
    pub medical_deduction: Yen,
    pub pension_deduction: Yen,
    pub total: Yen,
    pub formula: String,
}

/// Deduction for a single category's annual premium.
pub fn category_deduction(premium: Yen) -> Yen {
    let premium = to_decimal(premium);
    floor_yen(LIFE_INSURANCE_SCHEDULE.bracket_for(premium).deduction_on(premium))
}

/// Computes the life insurance deduction from the three category premiums.
pub fn life_insurance_deduction(
    general_premium: Yen,
    medical_premium: Yen,
    pension_premium: Yen,
) -> LifeInsuranceDeduction {
    let general_deduction = category_deduction(general_premium);
    let medical_deduction = category_deduction(medical_premium);
    let pension_deduction = category_deduction(pension_premium);

    let total =
        (general_deduction + medical_deduction + pension_deduction).min(LIFE_INSURANCE_TOTAL_CAP);

    LifeInsuranceDeduction {
        general_deduction,
        medical_deduction,
        pension_deduction,
        total,
        formula: format!(
            "life insurance deduction = min({}, {} + {} + {}) = {}",
            format_yen(LIFE_INSURANCE_TOTAL_CAP),
            format_yen(general_deduction),
            format_yen(medical_deduction),
            format_yen(pension_deduction),
            format_yen(total),
        ),
    }
}
