//! Command-line arguments shared by the `netpay` binary, and output rendering.

use clap::{Args, ValueEnum};
use netpay_core::{Dependents, InsurancePremiums, NetIncomeInput, NetIncomeResult, Yen};

use crate::report::{BatchSummary, TextReport};
use crate::utils::parse_yen;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Inputs for a single estimate. Amounts accept comma separators.
#[derive(Debug, Clone, Args)]
pub struct EstimateArgs {
    /// Gross annual salary.
    #[arg(long, value_parser = parse_yen)]
    pub salary: Yen,

    /// Medical expenses paid during the year.
    #[arg(long, value_parser = parse_yen, default_value = "0")]
    pub medical_expenses: Yen,

    /// Housing loan balance at year end.
    #[arg(long, value_parser = parse_yen, default_value = "0")]
    pub loan_balance: Yen,

    /// General life insurance premium.
    #[arg(long, value_parser = parse_yen, default_value = "0")]
    pub general_life: Yen,

    /// Medical / care insurance premium.
    #[arg(long, value_parser = parse_yen, default_value = "0")]
    pub medical_life: Yen,

    /// Individual pension insurance premium.
    #[arg(long, value_parser = parse_yen, default_value = "0")]
    pub pension: Yen,

    /// Earthquake insurance premium.
    #[arg(long, value_parser = parse_yen, default_value = "0")]
    pub earthquake: Yen,

    /// Legacy long-term non-life insurance premium.
    #[arg(long, value_parser = parse_yen, default_value = "0")]
    pub legacy_long_term: Yen,

    /// Claim a spouse.
    #[arg(long)]
    pub spouse: bool,

    /// Spouse's income.
    #[arg(long, value_parser = parse_yen, default_value = "0")]
    pub spouse_income: Yen,

    /// Number of elderly dependents (70+).
    #[arg(long, default_value_t = 0)]
    pub elderly: u32,

    /// Number of specific dependents (19-22).
    #[arg(long, default_value_t = 0)]
    pub specific: u32,

    /// Number of other dependents (16+).
    #[arg(long, default_value_t = 0)]
    pub general: u32,

    /// Disabled, or caring for a child under 23 (income adjustment deduction).
    #[arg(long)]
    pub special_condition: bool,
}

impl From<EstimateArgs> for NetIncomeInput {
    fn from(args: EstimateArgs) -> Self {
        Self {
            salary: args.salary,
            medical_expenses: args.medical_expenses,
            loan_balance: args.loan_balance,
            insurances: InsurancePremiums {
                general_life: args.general_life,
                medical_life: args.medical_life,
                pension: args.pension,
                earthquake: args.earthquake,
                legacy_long_term: args.legacy_long_term,
            },
            dependents: Dependents {
                spouse_qualifies: args.spouse,
                spouse_income: args.spouse_income,
                elderly: args.elderly,
                specific: args.specific,
                general: args.general,
            },
            has_special_condition: args.special_condition,
        }
    }
}

/// Renders a single estimate.
pub fn render_one(
    result: &NetIncomeResult,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(TextReport(result).to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(result),
    }
}

/// Renders a batch of estimates: a summary table, or a JSON array.
pub fn render_batch(
    results: &[NetIncomeResult],
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(BatchSummary(results).to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(results),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use netpay_core::calculate_net_income;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        estimate: EstimateArgs,
    }

    fn parse(args: &[&str]) -> Result<NetIncomeInput, clap::Error> {
        let argv = std::iter::once("netpay").chain(args.iter().copied());
        TestCli::try_parse_from(argv).map(|cli| cli.estimate.into())
    }

    // ===== EstimateArgs tests =====

    #[test]
    fn salary_only_defaults_the_rest() {
        assert_eq!(parse(&["--salary", "5000000"]).unwrap(), NetIncomeInput::new(5_000_000));
    }

    #[test]
    fn amounts_accept_commas() {
        let input = parse(&["--salary", "5,000,000", "--loan-balance", "20,000,000"]).unwrap();

        assert_eq!(input.salary, 5_000_000);
        assert_eq!(input.loan_balance, 20_000_000);
    }

    #[test]
    fn flags_map_onto_dependents() {
        let input = parse(&[
            "--salary",
            "9000000",
            "--spouse",
            "--spouse-income",
            "400,000",
            "--elderly",
            "1",
            "--general",
            "2",
            "--special-condition",
        ])
        .unwrap();

        assert_eq!(
            input.dependents,
            Dependents {
                spouse_qualifies: true,
                spouse_income: 400_000,
                elderly: 1,
                specific: 0,
                general: 2,
            }
        );
        assert!(input.has_special_condition);
    }

    #[test]
    fn salary_is_required() {
        assert!(parse(&["--medical-expenses", "100000"]).is_err());
    }

    #[test]
    fn malformed_amount_is_rejected() {
        assert!(parse(&["--salary", "five million"]).is_err());
    }

    // ===== render tests =====

    #[test]
    fn json_uses_camel_case() {
        let result = calculate_net_income(&NetIncomeInput::new(5_000_000));

        let json = render_one(&result, OutputFormat::Json).unwrap();

        assert!(json.contains("\"netIncome\": 3680788"));
        assert!(json.contains("\"furusatoNozei\""));
    }

    #[test]
    fn batch_json_is_an_array() {
        let results = vec![calculate_net_income(&NetIncomeInput::new(5_000_000))];

        let json = render_batch(&results, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(1));
    }
}
