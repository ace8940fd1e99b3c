use rust_decimal::Decimal;
use serde::Serialize;

use super::Bracket;

/// One row of a piecewise-linear deduction table.
///
/// The deduction for an amount inside the row is `amount × rate + offset`,
/// limited to `cap` when one is set. Flat rows use a zero rate and carry the
/// flat amount in `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeductionBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    pub offset: Decimal,
    pub cap: Option<Decimal>,
}

impl DeductionBracket {
    /// Deduction for `amount`, unrounded.
    pub fn deduction_on(
        &self,
        amount: Decimal,
    ) -> Decimal {
        let linear = amount * self.rate + self.offset;
        match self.cap {
            Some(cap) => linear.min(cap),
            None => linear,
        }
    }
}

impl Bracket for DeductionBracket {
    fn contains(
        &self,
        amount: Decimal,
    ) -> bool {
        self.upper_bound.is_none_or(|upper| amount <= upper)
    }
}
