//! Deductions taken from salary before either tax is computed.

pub mod dependents;
pub mod earthquake_insurance;
pub mod income_adjustment;
pub mod life_insurance;
pub mod medical;
pub mod salary;

pub use dependents::{DependentDeduction, dependent_deduction};
pub use earthquake_insurance::{EarthquakeInsuranceDeduction, earthquake_insurance_deduction};
pub use income_adjustment::{IncomeAdjustmentDeduction, income_adjustment_deduction};
pub use life_insurance::{LifeInsuranceDeduction, life_insurance_deduction};
pub use medical::{MedicalDeduction, medical_deduction};
pub use salary::{SalaryDeduction, salary_deduction};
