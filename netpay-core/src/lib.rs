pub mod calculations;
pub mod models;
pub mod rates;

pub use calculations::{NetIncomeResult, calculate_net_income};
pub use models::*;
