use serde::Deserialize;

use super::Yen;

/// Household members that qualify for dependent deductions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Dependents {
    /// Whether the taxpayer has a spouse who may qualify.
    pub spouse_qualifies: bool,
    /// The spouse's own annual income; gates the spouse deduction.
    pub spouse_income: Yen,
    /// Dependents aged 70 or over.
    pub elderly: u32,
    /// Dependents aged 19 to 22.
    pub specific: u32,
    /// Other dependents aged 16 or over.
    pub general: u32,
}
