use rust_decimal::Decimal;
use serde::Serialize;

use super::Bracket;

/// A standard monthly remuneration grade.
///
/// Covers monthly income in `[lower_bound, upper_bound)`; the final grade has
/// no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemunerationBand {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub standard: Decimal,
}

impl Bracket for RemunerationBand {
    fn contains(
        &self,
        amount: Decimal,
    ) -> bool {
        amount >= self.lower_bound && self.upper_bound.is_none_or(|upper| amount < upper)
    }
}
