use rust_decimal::Decimal;

/// A row of an ordered range table.
pub trait Bracket {
    /// Whether `amount` falls inside this row's range.
    fn contains(
        &self,
        amount: Decimal,
    ) -> bool;
}

/// An ordered range table with an open-ended top row.
///
/// Lookups scan `bounded` in order and return the first row containing the
/// amount. Anything that no bounded row claims (amounts above the last bound,
/// or below the first lower bound for half-open tables) resolves to `top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule<'a, B> {
    pub bounded: &'a [B],
    pub top: B,
}

impl<'a, B: Bracket> Schedule<'a, B> {
    pub const fn new(
        bounded: &'a [B],
        top: B,
    ) -> Self {
        Self { bounded, top }
    }

    /// Returns the row that applies to `amount`.
    pub fn bracket_for(
        &self,
        amount: Decimal,
    ) -> &B {
        self.bounded
            .iter()
            .find(|bracket| bracket.contains(amount))
            .unwrap_or(&self.top)
    }

    /// Whether `amount` resolves to the open-ended top row.
    pub fn is_top(
        &self,
        amount: Decimal,
    ) -> bool {
        !self.bounded.iter().any(|bracket| bracket.contains(amount))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct UpTo(Decimal);

    impl Bracket for UpTo {
        fn contains(
            &self,
            amount: Decimal,
        ) -> bool {
            amount <= self.0
        }
    }

    const ROWS: &[UpTo] = &[UpTo(dec!(10)), UpTo(dec!(20))];

    #[test]
    fn bracket_for_returns_first_matching_row() {
        let schedule = Schedule::new(ROWS, UpTo(Decimal::MAX));

        assert_eq!(schedule.bracket_for(dec!(5)), &UpTo(dec!(10)));
        assert_eq!(schedule.bracket_for(dec!(10)), &UpTo(dec!(10)));
        assert_eq!(schedule.bracket_for(dec!(11)), &UpTo(dec!(20)));
    }

    #[test]
    fn bracket_for_falls_back_to_top() {
        let schedule = Schedule::new(ROWS, UpTo(Decimal::MAX));

        assert_eq!(schedule.bracket_for(dec!(21)), &UpTo(Decimal::MAX));
        assert!(schedule.is_top(dec!(21)));
        assert!(!schedule.is_top(dec!(20)));
    }

    #[test]
    fn empty_schedule_always_uses_top() {
        let schedule: Schedule<'_, UpTo> = Schedule::new(&[], UpTo(dec!(0)));

        assert_eq!(schedule.bracket_for(dec!(1000)), &UpTo(dec!(0)));
    }
}
