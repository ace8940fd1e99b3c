//! CSV loader for batch estimate input.
//!
//! ## CSV Format
//!
//! One estimate per row. Column order does **not** matter (headers are matched
//! by name). All header names are case-sensitive and must match exactly.
//! Every column except `salary` may be omitted entirely or left empty, which
//! means zero / false.
//!
//! | Column              | Required | Type    | Notes                                   |
//! |---------------------|----------|---------|-----------------------------------------|
//! | `salary`            | yes      | yen     | Gross annual salary                     |
//! | `medical_expenses`  | no       | yen     |                                         |
//! | `loan_balance`      | no       | yen     | Housing loan balance at year end        |
//! | `general_life`      | no       | yen     | General life insurance premium          |
//! | `medical_life`      | no       | yen     | Medical / care insurance premium        |
//! | `pension`           | no       | yen     | Individual pension insurance premium    |
//! | `earthquake`        | no       | yen     | Earthquake insurance premium            |
//! | `legacy_long_term`  | no       | yen     | Legacy long-term non-life premium       |
//! | `spouse`            | no       | bool    | `true` when a spouse may be claimed     |
//! | `spouse_income`     | no       | yen     |                                         |
//! | `elderly`           | no       | integer | Elderly dependents (70+)                |
//! | `specific`          | no       | integer | Specific dependents (19-22)             |
//! | `general`           | no       | integer | Other dependents (16+)                  |
//! | `special_condition` | no       | bool    | Unlocks the income adjustment deduction |
//!
//! Yen cells accept comma thousands separators when quoted (`"5,000,000"`).
//!
//! ### Minimal example
//!
//! ```csv
//! salary
//! 5000000
//! ```
//!
//! ### Full example
//!
//! ```csv
//! salary,medical_expenses,loan_balance,general_life,medical_life,pension,earthquake,legacy_long_term,spouse,spouse_income,elderly,specific,general,special_condition
//! "5,000,000",300000,20000000,50000,30000,40000,20000,,true,400000,1,0,1,false
//! ```
use std::path::Path;

use netpay_core::{Dependents, InsurancePremiums, NetIncomeInput, Yen};
use serde::Deserialize;

use crate::utils::{ParseYenError, parse_yen};
use crate::validation::{InputError, validate};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    salary: String,
    medical_expenses: Option<String>,
    loan_balance: Option<String>,
    general_life: Option<String>,
    medical_life: Option<String>,
    pension: Option<String>,
    earthquake: Option<String>,
    legacy_long_term: Option<String>,
    spouse: Option<bool>,
    spouse_income: Option<String>,
    elderly: Option<u32>,
    specific: Option<u32>,
    general: Option<u32>,
    special_condition: Option<bool>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("cannot read CSV file: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The required salary cell is empty. `row` is 1-based.
    #[error("row {row}: salary is required")]
    MissingSalary { row: usize },

    /// A yen cell could not be parsed. `row` is 1-based (header = row 0).
    #[error("invalid {column} on row {row}: {source}")]
    InvalidAmount {
        column: &'static str,
        row: usize,
        #[source]
        source: ParseYenError,
    },

    /// The row parsed but holds a value the engine must not receive.
    #[error("row {row}: {source}")]
    InvalidInput {
        row: usize,
        #[source]
        source: InputError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn amount(
    cell: Option<&str>,
    column: &'static str,
    row: usize,
) -> Result<Yen, CsvLoadError> {
    parse_yen(cell.unwrap_or_default())
        .map_err(|source| CsvLoadError::InvalidAmount { column, row, source })
}

/// Convert a single CSV row into a NetIncomeInput.
///
/// row_number is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<NetIncomeInput, CsvLoadError> {
    let cell = |value: &Option<String>, column| amount(value.as_deref(), column, row_number);

    if row.salary.is_empty() {
        return Err(CsvLoadError::MissingSalary { row: row_number });
    }

    let input = NetIncomeInput {
        salary: amount(Some(row.salary.as_str()), "salary", row_number)?,
        medical_expenses: cell(&row.medical_expenses, "medical_expenses")?,
        loan_balance: cell(&row.loan_balance, "loan_balance")?,
        insurances: InsurancePremiums {
            general_life: cell(&row.general_life, "general_life")?,
            medical_life: cell(&row.medical_life, "medical_life")?,
            pension: cell(&row.pension, "pension")?,
            earthquake: cell(&row.earthquake, "earthquake")?,
            legacy_long_term: cell(&row.legacy_long_term, "legacy_long_term")?,
        },
        dependents: Dependents {
            spouse_qualifies: row.spouse.unwrap_or_default(),
            spouse_income: cell(&row.spouse_income, "spouse_income")?,
            elderly: row.elderly.unwrap_or_default(),
            specific: row.specific.unwrap_or_default(),
            general: row.general.unwrap_or_default(),
        },
        has_special_condition: row.special_condition.unwrap_or_default(),
    };

    validate(&input).map_err(|source| CsvLoadError::InvalidInput {
        row: row_number,
        source,
    })?;

    Ok(input)
}

/// Parse CSV text (the full file contents as a &str) and return one
/// NetIncomeInput per row, in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] – if the CSV is structurally invalid or a
///   required column is missing.
/// * [CsvLoadError::MissingSalary] – if a row leaves `salary` empty.
/// * [CsvLoadError::InvalidAmount] – if a yen cell is not a whole number.
/// * [CsvLoadError::InvalidInput] – if any amount is negative.
pub fn load_from_str(input: &str) -> Result<Vec<NetIncomeInput>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            let row_number = idx + 1; // 1-based for user-facing messages
            convert_row(row, row_number)
        })
        .collect()
}

/// Convenience wrapper: read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<NetIncomeInput>, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const MINIMAL_CSV: &str = "\
salary
5000000
";

    const FULL_CSV: &str = "\
salary,medical_expenses,loan_balance,general_life,medical_life,pension,earthquake,legacy_long_term,spouse,spouse_income,elderly,specific,general,special_condition
\"9,000,000\",300000,20000000,50000,30000,40000,20000,12000,true,400000,1,2,1,true
";

    const MULTI_ROW_CSV: &str = "\
salary,loan_balance,spouse
3000000,,false
5000000,20000000,true
12000000,,
";

    // -----------------------------------------------------------------------
    // 1. Minimal CSV – only the salary column, everything else defaults
    // -----------------------------------------------------------------------
    #[test]
    fn minimal_csv_defaults_everything_but_salary() {
        let inputs = load_from_str(MINIMAL_CSV).expect("should parse minimal CSV");

        assert_eq!(inputs, vec![NetIncomeInput::new(5_000_000)]);
    }

    // -----------------------------------------------------------------------
    // 2. Full CSV – every column populated
    // -----------------------------------------------------------------------
    #[test]
    fn full_csv_all_fields_populated() {
        let inputs = load_from_str(FULL_CSV).expect("should parse full CSV");

        assert_eq!(
            inputs[0],
            NetIncomeInput {
                salary: 9_000_000,
                medical_expenses: 300_000,
                loan_balance: 20_000_000,
                insurances: InsurancePremiums {
                    general_life: 50_000,
                    medical_life: 30_000,
                    pension: 40_000,
                    earthquake: 20_000,
                    legacy_long_term: 12_000,
                },
                dependents: Dependents {
                    spouse_qualifies: true,
                    spouse_income: 400_000,
                    elderly: 1,
                    specific: 2,
                    general: 1,
                },
                has_special_condition: true,
            }
        );
    }

    // -----------------------------------------------------------------------
    // 3. Multiple rows – count, order, empty cells
    // -----------------------------------------------------------------------
    #[test]
    fn multi_row_keeps_file_order() {
        let inputs = load_from_str(MULTI_ROW_CSV).expect("should parse multi-row CSV");

        let salaries: Vec<Yen> = inputs.iter().map(|i| i.salary).collect();
        assert_eq!(salaries, vec![3_000_000, 5_000_000, 12_000_000]);
    }

    #[test]
    fn multi_row_empty_cells_are_zero() {
        let inputs = load_from_str(MULTI_ROW_CSV).expect("should parse");

        assert_eq!(inputs[0].loan_balance, 0);
        assert_eq!(inputs[1].loan_balance, 20_000_000);
        assert!(inputs[1].dependents.spouse_qualifies);
        assert!(!inputs[2].dependents.spouse_qualifies);
    }

    // -----------------------------------------------------------------------
    // 4. Errors
    // -----------------------------------------------------------------------
    #[test]
    fn missing_salary_column_returns_parse_error() {
        let result = load_from_str("loan_balance\n20000000\n");

        match result.unwrap_err() {
            CsvLoadError::Parse(_) => { /* expected */ }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn blank_salary_cell_is_rejected() {
        let csv = "salary,loan_balance\n5000000,\n,20000000\n";

        match load_from_str(csv).unwrap_err() {
            CsvLoadError::MissingSalary { row } => assert_eq!(row, 2),
            other => panic!("expected MissingSalary, got {:?}", other),
        }
    }

    #[test]
    fn invalid_amount_reports_column_and_row() {
        let csv = "salary,medical_expenses\n5000000,100000\n6000000,lots\n";

        match load_from_str(csv).unwrap_err() {
            CsvLoadError::InvalidAmount { column, row, .. } => {
                assert_eq!(column, "medical_expenses");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn negative_amount_is_rejected() {
        let csv = "salary,pension\n5000000,-40000\n";

        match load_from_str(csv).unwrap_err() {
            CsvLoadError::InvalidInput { row, source } => {
                assert_eq!(row, 1);
                assert_eq!(
                    source,
                    InputError::NegativeAmount {
                        field: "insurances.pension"
                    }
                );
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn non_boolean_flag_returns_parse_error() {
        let csv = "salary,spouse\n5000000,maybe\n";

        assert!(matches!(load_from_str(csv), Err(CsvLoadError::Parse(_))));
    }

    // -----------------------------------------------------------------------
    // 5. Empty input
    // -----------------------------------------------------------------------
    #[test]
    fn header_only_returns_empty_vec() {
        let inputs = load_from_str("salary\n").expect("header-only CSV is valid");
        assert!(inputs.is_empty());
    }

    // -----------------------------------------------------------------------
    // 6. Whitespace tolerance and column order
    // -----------------------------------------------------------------------
    #[test]
    fn whitespace_around_values_is_trimmed() {
        let csv = "\
salary , medical_expenses
5000000 , 300000
";
        let inputs = load_from_str(csv).expect("should tolerate surrounding whitespace");
        assert_eq!(inputs[0].medical_expenses, 300_000);
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "\
general,loan_balance,salary
2,10000000,4000000
";
        let inputs = load_from_str(csv).expect("column order should not matter");
        assert_eq!(inputs[0].salary, 4_000_000);
        assert_eq!(inputs[0].loan_balance, 10_000_000);
        assert_eq!(inputs[0].dependents.general, 2);
    }
}
