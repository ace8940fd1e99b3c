//! Plain-text rendering of estimate results.

use std::fmt::{self, Display, Formatter};

use netpay_core::calculations::common::format_yen;
use netpay_core::{NetIncomeResult, Yen};

const LABEL_WIDTH: usize = 32;
const AMOUNT_WIDTH: usize = 14;

fn heading(
    f: &mut Formatter<'_>,
    label: &str,
    amount: Yen,
) -> fmt::Result {
    writeln!(f, "{label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}", format_yen(amount))
}

fn item(
    f: &mut Formatter<'_>,
    label: &str,
    amount: Yen,
) -> fmt::Result {
    writeln!(
        f,
        "  {label:<width$}{:>AMOUNT_WIDTH$}",
        format_yen(amount),
        width = LABEL_WIDTH - 2
    )
}

fn note(
    f: &mut Formatter<'_>,
    text: &str,
) -> fmt::Result {
    writeln!(f, "    {text}")
}

/// Full breakdown of a single estimate.
pub struct TextReport<'a>(pub &'a NetIncomeResult);

impl Display for TextReport<'_> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        let r = self.0;

        heading(f, "Salary", r.salary)?;
        item(f, "Salary income deduction", r.salary_deduction)?;
        item(f, "Salary income", r.salary_income)?;
        note(f, &r.salary_deduction_formula)?;
        writeln!(f)?;

        writeln!(f, "Deductions")?;
        item(f, "Medical expenses paid", r.medical_expenses)?;
        item(f, "Medical expense deduction", r.medical_deduction.deduction)?;
        note(f, &r.medical_deduction.formula)?;
        item(f, "Life insurance deduction", r.insurance_deductions.life.total)?;
        note(f, &r.insurance_deductions.life.formula)?;
        item(f, "Earthquake insurance deduction", r.insurance_deductions.earthquake.deduction)?;
        note(f, &r.insurance_deductions.earthquake.formula)?;
        item(f, "Dependent deduction", r.dependent_deduction.total)?;
        note(f, &r.dependent_deduction.formula)?;
        item(f, "Income adjustment deduction", r.income_adjustment.deduction)?;
        note(f, &r.income_adjustment.formula)?;
        writeln!(f)?;

        let loan = &r.housing_loan;
        heading(f, "Housing loan balance", loan.balance)?;
        item(f, "Credit", loan.deduction.total)?;
        item(f, "Applied to income tax", loan.deduction.income_tax)?;
        item(f, "Applied to resident tax", loan.deduction.resident_tax)?;
        note(f, &loan.deduction.formula)?;
        writeln!(f)?;

        heading(f, "Income tax", r.income_tax)?;
        item(f, "Taxable base", r.income_tax_base)?;
        note(f, &r.income_tax_calculation.formula)?;
        heading(f, "Resident tax", r.resident_tax)?;
        item(f, "Taxable base", r.resident_tax_base)?;
        note(f, &r.resident_tax_calculation.formula)?;
        writeln!(f)?;

        let insurance = &r.insurance;
        heading(f, "Social insurance", insurance.total)?;
        item(f, "Standard monthly remuneration", insurance.standard_monthly_remuneration)?;
        item(f, "Health insurance", insurance.health)?;
        item(f, "Pension insurance", insurance.pension)?;
        item(f, "Employment insurance", insurance.employment)?;
        for formula in &insurance.formulas {
            note(f, formula)?;
        }
        writeln!(f)?;

        heading(f, "Donation limit", r.donation_limit.limit)?;
        note(f, &r.donation_limit.formula)?;
        writeln!(f)?;

        heading(f, "Net income", r.net_income)
    }
}

/// One line per estimate, for batch runs.
pub struct BatchSummary<'a>(pub &'a [NetIncomeResult]);

impl Display for BatchSummary<'_> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:>4} {:>14} {:>12} {:>12} {:>12} {:>14} {:>12}",
            "row", "salary", "income tax", "resident tax", "insurance", "net income", "donation"
        )?;
        for (idx, r) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{:>4} {:>14} {:>12} {:>12} {:>12} {:>14} {:>12}",
                idx + 1,
                format_yen(r.salary),
                format_yen(r.income_tax),
                format_yen(r.resident_tax),
                format_yen(r.insurance.total),
                format_yen(r.net_income),
                format_yen(r.donation_limit.limit),
            )?;
        }
        Ok(())
    }
}
