//! Engine configuration from the environment
//!
//! Rule constants (cutover date, virtual start factor) are not configurable.

use std::env;

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::warn;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const TODAY_VAR: &str = "ATHLETICS_TODAY";
const STRICT_DATA_VAR: &str = "ATHLETICS_RULES_STRICT";

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
  #[error("Invalid date in {var}: {value} (expected YYYY-MM-DD)")]
  InvalidDate { var: &'static str, value: String },

  #[error("Invalid boolean in {var}: {value}")]
  InvalidBool { var: &'static str, value: String },
}

/// ---------------------------------------------------------------------------
/// Rules Config
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RulesConfig {
  /// Fixed "today" for default as-of dates; `None` uses the local date
  pub today_override: Option<NaiveDate>,
  /// Treat static data defects as a startup error
  pub strict_data: bool,
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" | "" => Ok(false),
    _ => Err(ConfigError::InvalidBool {
      var,
      value: value.to_string(),
    }),
  }
}

impl RulesConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let today_override = match env::var(TODAY_VAR) {
      Ok(value) => Some(
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ConfigError::InvalidDate {
          var: TODAY_VAR,
          value,
        })?,
      ),
      Err(_) => None,
    };

    let strict_data = match env::var(STRICT_DATA_VAR) {
      Ok(value) => parse_bool(STRICT_DATA_VAR, &value)?,
      Err(_) => false,
    };

    Ok(Self {
      today_override,
      strict_data,
    })
  }

  /// Date used when a caller does not supply one
  pub fn today(&self) -> NaiveDate {
    self
      .today_override
      .unwrap_or_else(|| Local::now().date_naive())
  }
}

/// Load `.env` if present, then read the environment. Invalid values are
/// logged and replaced with defaults.
pub fn load() -> RulesConfig {
  dotenvy::dotenv().ok();
  RulesConfig::from_env().unwrap_or_else(|e| {
    warn!(error = %e, "Invalid rules configuration, using defaults");
    RulesConfig::default()
  })
}
