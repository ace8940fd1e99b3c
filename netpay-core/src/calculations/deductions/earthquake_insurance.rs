//! Earthquake insurance premium deduction.
//!
//! Earthquake premiums are deductible in full up to 50,000. Premiums on
//! legacy long-term non-life contracts use their own tiered scale capped at
//! 10,000. When both are paid the combined deduction shares the same 50,000
//! ceiling.

use serde::Serialize;

use crate::calculations::common::{floor_yen, format_yen, to_decimal};
use crate::models::{DeductionBracket, Schedule, Yen};
use crate::rates::{
    EARTHQUAKE_COMBINED_CAP, EARTHQUAKE_INSURANCE_SCHEDULE, LEGACY_LONG_TERM_SCHEDULE,
};

/// Earthquake insurance deduction with its two components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthquakeInsuranceDeduction {
    pub earthquake_deduction: Yen,
    pub legacy_deduction: Yen,

    /// The amount applied against the tax bases.
    pub deduction: Yen,

    pub formula: String,
}

fn scheduled_deduction(
    schedule: &Schedule<'_, DeductionBracket>,
    premium: Yen,
) -> Yen {
    let premium = to_decimal(premium);
    floor_yen(schedule.bracket_for(premium).deduction_on(premium))
}

/// Computes the earthquake insurance deduction.
pub fn earthquake_insurance_deduction(
    earthquake_premium: Yen,
    legacy_premium: Yen,
) -> EarthquakeInsuranceDeduction {
    let earthquake_deduction = scheduled_deduction(&EARTHQUAKE_INSURANCE_SCHEDULE, earthquake_premium);
    let legacy_deduction = scheduled_deduction(&LEGACY_LONG_TERM_SCHEDULE, legacy_premium);

    let (deduction, formula) = match (earthquake_premium > 0, legacy_premium > 0) {
        (true, true) => {
            let combined = (earthquake_deduction + legacy_deduction).min(EARTHQUAKE_COMBINED_CAP);
            (
                combined,
                format!(
                    "earthquake insurance deduction = min({}, {} + {}) = {}",
                    format_yen(EARTHQUAKE_COMBINED_CAP),
                    format_yen(earthquake_deduction),
                    format_yen(legacy_deduction),
                    format_yen(combined),
                ),
            )
        }
        (true, false) => (
            earthquake_deduction,
            format!(
                "earthquake insurance deduction = min({}, {}) = {}",
                format_yen(EARTHQUAKE_COMBINED_CAP),
                format_yen(earthquake_premium),
                format_yen(earthquake_deduction),
            ),
        ),
        (false, true) => (
            legacy_deduction,
            format!(
                "earthquake insurance deduction = legacy long-term {} = {}",
                format_yen(legacy_premium),
                format_yen(legacy_deduction),
            ),
        ),
        (false, false) => (
            0,
            "earthquake insurance deduction = 0 (no premiums paid)".to_string(),
        ),
    };

    EarthquakeInsuranceDeduction {
        earthquake_deduction,
        legacy_deduction,
        deduction,
        formula,
    }
}
