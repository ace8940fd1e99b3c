//! Net take-home pay.
//!
//! [`calculate_net_income`] runs every calculator in dependency order and
//! collects their results into a single [`NetIncomeResult`]:
//!
//! 1. Salary income deduction.
//! 2. Medical, life insurance, earthquake insurance, dependent and income
//!    adjustment deductions.
//! 3. Housing loan credit.
//! 4. Income tax, which absorbs as much of the housing credit as it can.
//! 5. Resident tax, which absorbs the remainder up to its own ceiling.
//! 6. Social insurance, from salary alone.
//! 7. Donation limit, from its own rebuilt bases.
//!
//! Net income is salary less both taxes and total social insurance.

use serde::Serialize;
use tracing::{debug, warn};

use crate::calculations::common::floor_yen;
use crate::calculations::deductions::{
    DependentDeduction, EarthquakeInsuranceDeduction, IncomeAdjustmentDeduction,
    LifeInsuranceDeduction, MedicalDeduction, dependent_deduction, earthquake_insurance_deduction,
    income_adjustment_deduction, life_insurance_deduction, medical_deduction, salary_deduction,
};
use crate::calculations::donation_limit::{DonationLimit, donation_limit};
use crate::calculations::housing_loan::{HousingLoan, HousingLoanDeduction, housing_loan_credit};
use crate::calculations::income_tax::{IncomeTax, income_tax};
use crate::calculations::resident_tax::{ResidentTax, resident_tax};
use crate::calculations::social_insurance::{SocialInsurance, social_insurance};
use crate::calculations::taxable_base::DeductionStack;
use crate::models::{NetIncomeInput, Yen};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceDeductions {
    pub life: LifeInsuranceDeduction,
    pub earthquake: EarthquakeInsuranceDeduction,
}

/// Every figure produced for one estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetIncomeResult {
    pub salary: Yen,
    pub salary_deduction: Yen,
    pub salary_income: Yen,
    pub salary_deduction_formula: String,
    pub income_tax_base: Yen,
    pub resident_tax_base: Yen,
    pub income_tax: Yen,
    pub resident_tax: Yen,
    pub insurance: SocialInsurance,
    pub medical_expenses: Yen,
    pub medical_deduction: MedicalDeduction,
    pub housing_loan: HousingLoan,
    pub insurance_deductions: InsuranceDeductions,
    #[serde(rename = "furusatoNozei")]
    pub donation_limit: DonationLimit,
    pub dependent_deduction: DependentDeduction,
    pub income_adjustment: IncomeAdjustmentDeduction,
    pub income_tax_calculation: IncomeTax,
    pub resident_tax_calculation: ResidentTax,
    pub net_income: Yen,
}

/// Computes net take-home pay and every intermediate figure for `input`.
///
/// Inputs are not validated. Negative amounts are logged and then used as
/// given.
pub fn calculate_net_income(input: &NetIncomeInput) -> NetIncomeResult {
    let negative = input.negative_fields();
    if !negative.is_empty() {
        warn!(fields = ?negative, "Negative amounts passed to net income calculation");
    }

    let salary = salary_deduction(input.salary);
    let medical = medical_deduction(input.medical_expenses, salary.salary_income);
    let life = life_insurance_deduction(
        input.insurances.general_life,
        input.insurances.medical_life,
        input.insurances.pension,
    );
    let earthquake =
        earthquake_insurance_deduction(input.insurances.earthquake, input.insurances.legacy_long_term);
    let dependents = dependent_deduction(&input.dependents);
    let adjustment = income_adjustment_deduction(input.salary, input.has_special_condition);

    let stack = DeductionStack {
        salary_income: salary.salary_income,
        income_adjustment: adjustment.deduction,
        medical: medical.deduction,
        life_insurance: life.total,
        earthquake_insurance: earthquake.deduction,
        dependents: dependents.total,
    };

    let credit = housing_loan_credit(input.loan_balance);
    let income_tax = income_tax(&stack, &credit);
    let resident_tax = resident_tax(&stack, &credit, income_tax.credit_applied);
    let insurance = social_insurance(input.salary);
    let donation = donation_limit(&stack);

    let net_income = input.salary - income_tax.tax - resident_tax.tax - insurance.total;

    debug!(
        salary = input.salary,
        income_tax = income_tax.tax,
        resident_tax = resident_tax.tax,
        social_insurance = insurance.total,
        net_income,
        "Calculated net income"
    );

    NetIncomeResult {
        salary: input.salary,
        salary_deduction: floor_yen(salary.deduction),
        salary_income: floor_yen(salary.salary_income),
        salary_deduction_formula: salary.formula,
        income_tax_base: income_tax.taxable_base,
        resident_tax_base: resident_tax.taxable_base,
        income_tax: income_tax.tax,
        resident_tax: resident_tax.tax,
        insurance,
        medical_expenses: input.medical_expenses,
        medical_deduction: medical,
        housing_loan: HousingLoan {
            balance: input.loan_balance,
            deduction: HousingLoanDeduction {
                total: credit.total,
                income_tax: income_tax.credit_applied,
                resident_tax: resident_tax.credit,
                formula: credit.formula,
            },
        },
        insurance_deductions: InsuranceDeductions { life, earthquake },
        donation_limit: donation,
        dependent_deduction: dependents,
        income_adjustment: adjustment,
        income_tax_calculation: income_tax,
        resident_tax_calculation: resident_tax,
        net_income,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn salary_only() {
        let result = calculate_net_income(&NetIncomeInput::new(5_000_000));

        assert_eq!(result.salary_deduction, 1_202_500);
        assert_eq!(result.salary_income, 3_797_500);
        assert_eq!(result.income_tax_base, 3_317_500);
        assert_eq!(result.resident_tax_base, 3_367_500);
        assert_eq!(result.income_tax, 240_956);
        assert_eq!(result.resident_tax, 341_750);
        assert_eq!(result.insurance.total, 736_506);
        assert_eq!(result.net_income, 3_680_788);
    }

    #[test]
    fn net_income_is_salary_less_taxes_and_insurance() {
        let result = calculate_net_income(&NetIncomeInput::new(7_300_000));

        assert_eq!(
            result.net_income,
            result.salary - result.income_tax - result.resident_tax - result.insurance.total
        );
    }

    #[test]
    fn top_level_taxes_match_calculations() {
        let result = calculate_net_income(&NetIncomeInput::new(5_000_000));

        assert_eq!(result.income_tax, result.income_tax_calculation.tax);
        assert_eq!(result.resident_tax, result.resident_tax_calculation.tax);
    }

    #[test]
    fn housing_credit_exhausted_by_income_tax() {
        let input = NetIncomeInput {
            loan_balance: 20_000_000,
            ..NetIncomeInput::new(5_000_000)
        };

        let result = calculate_net_income(&input);

        assert_eq!(result.housing_loan.deduction.total, 200_000);
        assert_eq!(result.housing_loan.deduction.income_tax, 200_000);
        assert_eq!(result.housing_loan.deduction.resident_tax, 0);
        assert_eq!(result.income_tax, 40_956);
        assert_eq!(result.resident_tax, 341_750);
    }

    #[test]
    fn housing_credit_spills_into_resident_tax() {
        let input = NetIncomeInput {
            loan_balance: 40_000_000,
            ..NetIncomeInput::new(5_000_000)
        };

        let result = calculate_net_income(&input);

        assert_eq!(result.housing_loan.deduction.income_tax, 240_956);
        assert_eq!(result.housing_loan.deduction.resident_tax, 136_500);
        assert_eq!(result.income_tax, 0);
        assert_eq!(result.resident_tax, 205_250);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let result = calculate_net_income(&NetIncomeInput::new(5_000_000));

        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["netIncome"], 3_680_788);
        assert_eq!(json["insurance"]["standardMonthlyRemuneration"], 410_000);
        assert_eq!(json["housingLoan"]["deduction"]["incomeTax"], 0);
        assert!(json["furusatoNozei"]["limit"].is_i64());
        assert!(json.get("donationLimit").is_none());
    }
}
