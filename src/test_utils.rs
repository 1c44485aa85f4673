//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Date construction
//! - Birth year factories for a target age
//! - Log capture setup

use chrono::NaiveDate;

/// Build a date from literal parts
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Birth year of an athlete who turns `age` during `year`
pub fn birth_year_for_age(age: i32, year: i32) -> i32 {
  year - age
}

/// Route tracing output to the test harness. Safe to call from every test.
pub fn init_test_logging() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

/// Assert two floats are within `tolerance`
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
  assert!(
    (actual - expected).abs() <= tolerance,
    "expected {} to be within {} of {}",
    actual,
    tolerance,
    expected
  );
}
