mod deduction_bracket;
mod dependents;
mod insurance_premiums;
mod net_income_input;
mod remuneration_band;
mod schedule;
mod tax_bracket;

pub use deduction_bracket::DeductionBracket;
pub use dependents::Dependents;
pub use insurance_premiums::InsurancePremiums;
pub use net_income_input::NetIncomeInput;
pub use remuneration_band::RemunerationBand;
pub use schedule::{Bracket, Schedule};
pub use tax_bracket::TaxBracket;

/// A whole-yen monetary amount.
///
/// Signed so that out-of-range caller input (negative salary, negative
/// premiums) is representable and flows through the formulas unchanged.
pub type Yen = i64;
