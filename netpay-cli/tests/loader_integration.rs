//! Integration tests that exercise the loaders against on-disk fixture files.
//!
//! These complement the unit tests inside csv_loader.rs and profile.rs (which
//! all use inline string literals) by verifying that the full read-from-disk
//! path works end-to-end, through to the engine.

use std::path::PathBuf;

use netpay_cli::{csv_loader, profile};
use netpay_core::calculate_net_income;
use pretty_assertions::assert_eq;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn load_csv_fixture_succeeds() {
    let inputs = csv_loader::load_from_file(&fixture_path("sample_inputs.csv"))
        .expect("fixture file should load without error");

    // The fixture has exactly 3 rows.
    assert_eq!(inputs.len(), 3);
}

#[test]
fn csv_fixture_quoted_salary_with_commas() {
    let inputs = csv_loader::load_from_file(&fixture_path("sample_inputs.csv")).unwrap();

    assert_eq!(inputs[0].salary, 5_000_000);
    assert_eq!(inputs[2].salary, 9_000_000);
    assert!(inputs[2].has_special_condition);
}

#[test]
fn csv_fixture_rows_produce_expected_net_income() {
    let inputs = csv_loader::load_from_file(&fixture_path("sample_inputs.csv")).unwrap();

    let net: Vec<i64> = inputs
        .iter()
        .map(|input| calculate_net_income(input).net_income)
        .collect();

    assert_eq!(net, vec![3_680_788, 3_954_905, 6_097_144]);
}

#[test]
fn toml_profile_matches_equivalent_csv_row() {
    let from_profile = profile::load_profile(&fixture_path("household.toml")).unwrap();
    let from_csv = csv_loader::load_from_file(&fixture_path("sample_inputs.csv")).unwrap();

    assert_eq!(from_profile, from_csv[1]);
}

#[test]
fn missing_csv_file_is_an_io_error() {
    let result = csv_loader::load_from_file(&fixture_path("does_not_exist.csv"));

    assert!(matches!(result, Err(csv_loader::CsvLoadError::Io(_))));
}
