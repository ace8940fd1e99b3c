//! Employee social insurance premiums.
//!
//! Health and pension premiums are charged on the standard monthly
//! remuneration of the grade that contains the actual monthly income, not on
//! the income itself. Employment insurance is charged on the raw annual
//! salary.

use serde::Serialize;

use crate::calculations::common::{floor_yen, format_rate, format_yen, to_decimal};
use crate::models::Yen;
use crate::rates::{
    EMPLOYMENT_INSURANCE_RATE, HEALTH_INSURANCE_RATE, MONTHS_PER_YEAR, PENSION_INSURANCE_RATE,
    REMUNERATION_SCHEDULE,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialInsurance {
    pub health: Yen,
    pub pension: Yen,
    pub employment: Yen,
    pub total: Yen,
    pub standard_monthly_remuneration: Yen,
    pub formulas: Vec<String>,
}

/// Looks up the standard monthly remuneration for an annual salary.
pub fn standard_monthly_remuneration(salary: Yen) -> Yen {
    let monthly = to_decimal(salary.div_euclid(MONTHS_PER_YEAR));
    floor_yen(REMUNERATION_SCHEDULE.bracket_for(monthly).standard)
}

/// Computes the annual employee premiums for `salary`.
pub fn social_insurance(salary: Yen) -> SocialInsurance {
    let standard = standard_monthly_remuneration(salary);
    let months = to_decimal(MONTHS_PER_YEAR);

    let health = floor_yen(to_decimal(standard) * HEALTH_INSURANCE_RATE * months);
    let pension = floor_yen(to_decimal(standard) * PENSION_INSURANCE_RATE * months);
    let employment = floor_yen(to_decimal(salary) * EMPLOYMENT_INSURANCE_RATE);
    let total = health + pension + employment;

    let annual_premium = |name: &str, rate: String, amount: Yen| {
        format!(
            "{name} = {} × {rate} × {MONTHS_PER_YEAR} = {}",
            format_yen(standard),
            format_yen(amount),
        )
    };

    SocialInsurance {
        health,
        pension,
        employment,
        total,
        standard_monthly_remuneration: standard,
        formulas: vec![
            annual_premium("health insurance", format_rate(HEALTH_INSURANCE_RATE), health),
            annual_premium("pension insurance", format_rate(PENSION_INSURANCE_RATE), pension),
            format!(
                "employment insurance = {} × {} = {}",
                format_yen(salary),
                format_rate(EMPLOYMENT_INSURANCE_RATE),
                format_yen(employment),
            ),
        ],
    }
}
