//! Age category classification
//!
//! Two independent tables: the general one labels athletes and filters
//! eligible events, the skill-badge one decides which limit table applies.
//! They overlap in range but are defined separately by the federation and
//! must not be merged.
//!
//! Age is always the age the athlete turns during the calendar year.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::config::RulesConfig;
use crate::models::{AgeCategory, SkillAgeCategory};

/// (max age, category), youngest first. Ages past the last bound are adults.
const GENERAL_BANDS: &[(i32, AgeCategory)] = &[
  (3, AgeCategory::Age3),
  (4, AgeCategory::Age4),
  (5, AgeCategory::Age5),
  (6, AgeCategory::Age6),
  (7, AgeCategory::Age7),
  (8, AgeCategory::Age8),
  (9, AgeCategory::Age9),
  (10, AgeCategory::Age10),
  (11, AgeCategory::Age11),
  (12, AgeCategory::Age12),
  (13, AgeCategory::Age13),
  (14, AgeCategory::Age14),
  (15, AgeCategory::Age15),
  (17, AgeCategory::Age17),
  (19, AgeCategory::Age19),
  (22, AgeCategory::Age22),
];

/// (min age, max age, category). Ages outside every band get no skill badge.
const SKILL_BANDS: &[(i32, i32, SkillAgeCategory)] = &[
  (8, 8, SkillAgeCategory::T8),
  (9, 10, SkillAgeCategory::T9),
  (11, 12, SkillAgeCategory::T11),
  (13, 14, SkillAgeCategory::T13),
  (15, 16, SkillAgeCategory::T15),
];

/// Age reached during `year`. Saturates for out-of-range birth years.
pub fn age_in_year(birth_year: i32, year: i32) -> i32 {
  year.saturating_sub(birth_year)
}

/// General category as of `as_of`
pub fn classify(birth_year: i32, as_of: NaiveDate) -> AgeCategory {
  let age = age_in_year(birth_year, as_of.year());
  GENERAL_BANDS
    .iter()
    .find(|(max_age, _)| *max_age >= age)
    .map(|(_, category)| *category)
    .unwrap_or(AgeCategory::Adult)
}

/// General category as of the configured "today"
pub fn classify_today(birth_year: i32, config: &RulesConfig) -> AgeCategory {
  classify(birth_year, config.today())
}

/// Skill-badge band for a result in `result_year`
pub fn classify_for_skill_badge(birth_year: i32, result_year: i32) -> Option<SkillAgeCategory> {
  let age = age_in_year(birth_year, result_year);
  let band = SKILL_BANDS
    .iter()
    .find(|(min, max, _)| (*min..=*max).contains(&age))
    .map(|(_, _, category)| *category);

  if band.is_none() {
    debug!(birth_year, result_year, age, "Age outside skill badge bands");
  }
  band
}
