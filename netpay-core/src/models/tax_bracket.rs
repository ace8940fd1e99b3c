use rust_decimal::Decimal;
use serde::Serialize;

use super::Bracket;

/// One row of a progressive rate table, in quick-calculation form.
///
/// Tax for an amount inside the row is `amount × rate − subtraction`. An
/// amount belongs to the row when it does not exceed `upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    pub subtraction: Decimal,
}

impl TaxBracket {
    pub fn tax_on(
        &self,
        amount: Decimal,
    ) -> Decimal {
        amount * self.rate - self.subtraction
    }
}

impl Bracket for TaxBracket {
    fn contains(
        &self,
        amount: Decimal,
    ) -> bool {
        self.upper_bound.is_none_or(|upper| amount <= upper)
    }
}
