//! Household profile files.
//!
//! A profile is a TOML document describing one estimate. Only `salary` is
//! required; TOML integer underscores may be used as digit separators.
//!
//! ```toml
//! salary = 5_000_000
//! medical_expenses = 300_000
//! loan_balance = 20_000_000
//! has_special_condition = false
//!
//! [insurances]
//! general_life = 50_000
//! medical_life = 30_000
//! pension = 40_000
//! earthquake = 20_000
//! legacy_long_term = 0
//!
//! [dependents]
//! spouse_qualifies = true
//! spouse_income = 400_000
//! elderly = 1
//! specific = 0
//! general = 1
//! ```

use std::path::{Path, PathBuf};

use netpay_core::{Dependents, InsurancePremiums, NetIncomeInput, Yen};
use serde::Deserialize;
use thiserror::Error;

use crate::validation::{InputError, validate};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("cannot read profile '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid profile: {0}")]
    Invalid(#[from] InputError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Profile {
    salary: Yen,
    #[serde(default)]
    medical_expenses: Yen,
    #[serde(default)]
    loan_balance: Yen,
    #[serde(default)]
    insurances: InsurancePremiums,
    #[serde(default)]
    dependents: Dependents,
    #[serde(default)]
    has_special_condition: bool,
}

impl Profile {
    fn into_input(self) -> NetIncomeInput {
        NetIncomeInput {
            salary: self.salary,
            medical_expenses: self.medical_expenses,
            loan_balance: self.loan_balance,
            insurances: self.insurances,
            dependents: self.dependents,
            has_special_condition: self.has_special_condition,
        }
    }
}

/// Parses a profile document and validates the resulting input.
pub fn load_profile_from_str(contents: &str) -> Result<NetIncomeInput, ProfileError> {
    let profile: Profile = toml::from_str(contents)?;
    let input = profile.into_input();
    validate(&input)?;
    Ok(input)
}

/// Reads and parses the profile at `path`.
pub fn load_profile(path: &Path) -> Result<NetIncomeInput, ProfileError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_profile_from_str(&contents)
}
