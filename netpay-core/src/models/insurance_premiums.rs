use serde::Deserialize;

use super::Yen;

/// Annual insurance premiums paid, one field per deduction category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InsurancePremiums {
    /// General life insurance (new-system contracts).
    pub general_life: Yen,
    /// Medical and nursing-care life insurance.
    pub medical_life: Yen,
    /// Individual pension insurance.
    pub pension: Yen,
    pub earthquake: Yen,
    /// Legacy long-term non-life insurance (pre-2006 contracts).
    pub legacy_long_term: Yen,
}
