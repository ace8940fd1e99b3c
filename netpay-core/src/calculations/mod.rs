//! Deduction and tax calculators.
//!
//! Each calculator is a pure function over whole-yen inputs that returns its
//! result together with a formula string explaining how it was reached.
//! [`net_income::calculate_net_income`] composes them into a full estimate.

pub mod common;
pub mod deductions;
pub mod donation_limit;
pub mod housing_loan;
pub mod income_tax;
pub mod net_income;
pub mod resident_tax;
pub mod social_insurance;
pub mod taxable_base;

pub use donation_limit::{DonationLimit, donation_limit};
pub use housing_loan::{HousingLoan, HousingLoanCredit, HousingLoanDeduction, housing_loan_credit};
pub use income_tax::{IncomeTax, income_tax};
pub use net_income::{InsuranceDeductions, NetIncomeResult, calculate_net_income};
pub use resident_tax::{ResidentTax, resident_tax};
pub use social_insurance::{SocialInsurance, social_insurance, standard_monthly_remuneration};
pub use taxable_base::DeductionStack;
