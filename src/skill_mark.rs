//! Skill mark evaluation
//!
//! A result earns tier A, B or C when it reaches the published limit for the
//! athlete's skill-badge band and the discipline's skill key. Every
//! not-applicable case yields `None`; evaluation never fails.
//!
//! Rule version selection ("unpublished band fallback"):
//! - results dated before the cutover use the legacy tables
//! - results dated on or after the cutover use the current tables, unless the
//!   current version has no published rows for the athlete's band, in which
//!   case the legacy tables are used for that band
//!
//! The version is chosen once per evaluation; rows are never mixed between
//! versions.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::age::classify_for_skill_badge;
use crate::catalog::DisciplineCatalog;
use crate::models::{DisciplineId, RuleVersion, SkillAgeCategory, SkillLimit, SkillTier};
use crate::skill_limits::SkillLimitTables;

/// Outcome of rule version selection for one band and date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "selection", content = "version", rename_all = "snake_case")]
pub enum VersionSelection {
  /// The version in force on the result date
  InForce(RuleVersion),
  /// Current version in force but unpublished for the band; legacy applies
  UnpublishedFallback,
}

impl VersionSelection {
  pub fn version(&self) -> RuleVersion {
    match self {
      VersionSelection::InForce(version) => *version,
      VersionSelection::UnpublishedFallback => RuleVersion::Legacy,
    }
  }
}

pub struct SkillMarkEvaluator {
  catalog: &'static DisciplineCatalog,
  tables: &'static SkillLimitTables,
}

impl Default for SkillMarkEvaluator {
  fn default() -> Self {
    Self {
      catalog: DisciplineCatalog::global(),
      tables: SkillLimitTables::global(),
    }
  }
}

impl SkillMarkEvaluator {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pick the rule version for `category` on `date`
  pub fn select_version(&self, category: SkillAgeCategory, date: NaiveDate) -> VersionSelection {
    match RuleVersion::for_date(date) {
      RuleVersion::Current if !self.tables.is_populated(RuleVersion::Current, category) => {
        debug!(
          band = %category,
          date = %date,
          "Current skill limits not published for band, using legacy limits"
        );
        VersionSelection::UnpublishedFallback
      }
      version => VersionSelection::InForce(version),
    }
  }

  /// Rule version actually used for `category` on `date`
  pub fn effective_version(&self, category: SkillAgeCategory, date: NaiveDate) -> RuleVersion {
    self.select_version(category, date).version()
  }

  /// Thresholds that apply to a discipline for an athlete on `date`
  fn resolve_limit(
    &self,
    discipline_id: DisciplineId,
    birth_year: i32,
    date: NaiveDate,
  ) -> Option<SkillLimit> {
    let category = classify_for_skill_badge(birth_year, date.year())?;

    let Some(key) = self.tables.skill_key(discipline_id, category) else {
      debug!(discipline_id, band = %category, "No skill key for discipline in band");
      return None;
    };

    let version = self.effective_version(category, date);
    let limit = self.tables.limit(version, category, key);
    if limit.is_none() {
      debug!(
        discipline_id,
        band = %category,
        skill_key = key.as_str(),
        version = %version,
        "No skill limit row for combination"
      );
    }
    limit
  }

  /// Tier earned by `value` in a discipline, or `None` when no badge applies
  pub fn evaluate(
    &self,
    value: f64,
    discipline_id: DisciplineId,
    birth_year: i32,
    result_date: NaiveDate,
  ) -> Option<SkillTier> {
    let discipline = self.catalog.get(discipline_id)?;
    let limit = self.resolve_limit(discipline_id, birth_year, result_date)?;
    limit.tier_for(value, discipline.direction)
  }

  /// Limits for a discipline in `result_year`, for showing targets. Resolved
  /// as of 1 January of that year.
  pub fn limits_for(
    &self,
    discipline_id: DisciplineId,
    birth_year: i32,
    result_year: i32,
  ) -> Option<SkillLimit> {
    let start_of_year = NaiveDate::from_ymd_opt(result_year, 1, 1)?;
    self.resolve_limit(discipline_id, birth_year, start_of_year)
  }
}

pub fn evaluate(
  value: f64,
  discipline_id: DisciplineId,
  birth_year: i32,
  result_date: NaiveDate,
) -> Option<SkillTier> {
  SkillMarkEvaluator::new().evaluate(value, discipline_id, birth_year, result_date)
}
