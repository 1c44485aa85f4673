pub mod catalog;
pub mod goals;
pub mod skill;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::config::{self, RulesConfig};
use crate::skill_mark::SkillMarkEvaluator;
use crate::validation::{self, InvalidReferenceData};

/// Shared state handed to every command
pub struct RulesState {
  pub config: RulesConfig,
  pub evaluator: SkillMarkEvaluator,
}

impl RulesState {
  pub fn new(config: RulesConfig) -> Self {
    Self {
      config,
      evaluator: SkillMarkEvaluator::new(),
    }
  }

  /// Load configuration and check the static tables once at startup
  pub fn initialize() -> Result<Self, InvalidReferenceData> {
    let config = config::load();
    validation::check_at_startup(&config)?;
    Ok(Self::new(config))
  }
}

#[derive(Debug, Error)]
pub enum CommandError {
  #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
  InvalidDate(String),

  #[error("Unknown discipline: {0}")]
  UnknownDiscipline(u32),
}

/// Parse an ISO date from the frontend. Full RFC 3339 timestamps, with or
/// without an offset, are accepted and truncated to the date.
pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, CommandError> {
  let trimmed = raw.trim();
  NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
    .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
    .or_else(|_| {
      NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
    })
    .map_err(|_| CommandError::InvalidDate(raw.to_string()))
}
