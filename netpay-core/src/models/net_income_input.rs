use super::{Dependents, InsurancePremiums, Yen};

/// Everything the engine needs for one estimate.
///
/// [`NetIncomeInput::new`] sets the salary and leaves every other field at
/// zero / false.
/// The engine does not validate these values. Callers that accept user input
/// are expected to reject negative amounts before calling it (see
/// [`NetIncomeInput::negative_fields`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetIncomeInput {
    /// Gross annual salary.
    pub salary: Yen,
    /// Medical expenses paid during the year.
    pub medical_expenses: Yen,
    /// Outstanding housing loan balance at year end.
    pub loan_balance: Yen,
    pub insurances: InsurancePremiums,
    pub dependents: Dependents,
    /// Taxpayer (or a dependent) is disabled or caring for a child under 23,
    /// which unlocks the income adjustment deduction.
    pub has_special_condition: bool,
}

impl NetIncomeInput {
    pub fn new(salary: Yen) -> Self {
        Self {
            salary,
            ..Default::default()
        }
    }

    /// Names of the monetary fields holding a negative amount.
    pub fn negative_fields(&self) -> Vec<&'static str> {
        [
            ("salary", self.salary),
            ("medical_expenses", self.medical_expenses),
            ("loan_balance", self.loan_balance),
            ("insurances.general_life", self.insurances.general_life),
            ("insurances.medical_life", self.insurances.medical_life),
            ("insurances.pension", self.insurances.pension),
            ("insurances.earthquake", self.insurances.earthquake),
            ("insurances.legacy_long_term", self.insurances.legacy_long_term),
            ("dependents.spouse_income", self.dependents.spouse_income),
        ]
        .into_iter()
        .filter(|(_, amount)| *amount < 0)
        .map(|(name, _)| name)
        .collect()
    }
}
