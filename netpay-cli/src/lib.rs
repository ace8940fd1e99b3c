pub mod cli;
pub mod csv_loader;
pub mod logging;
pub mod profile;
pub mod report;
pub mod utils;
pub mod validation;
