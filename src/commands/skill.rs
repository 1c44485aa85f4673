//! Commands for skill badge marks and limit lookups

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::{parse_date, CommandError, RulesState};
use crate::age::classify_for_skill_badge;
use crate::models::{DisciplineId, RuleVersion, SkillAgeCategory, SkillLimit, SkillTier};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLimitsView {
  pub band: SkillAgeCategory,
  pub rule_version: RuleVersion,
  pub limits: SkillLimit,
}

pub fn calculate_skill_mark(
  state: &RulesState,
  value: f64,
  discipline_id: DisciplineId,
  birth_year: i32,
  result_date: String,
) -> Result<Option<SkillTier>, String> {
  let date = parse_date(&result_date).map_err(|e| e.to_string())?;
  Ok(state.evaluator.evaluate(value, discipline_id, birth_year, date))
}

/// Limits shown as targets on the discipline page; `None` when no badge
/// applies for the athlete that year
pub fn get_skill_limits(
  state: &RulesState,
  discipline_id: DisciplineId,
  birth_year: i32,
  result_year: i32,
) -> Result<Option<SkillLimitsView>, String> {
  let start_of_year = NaiveDate::from_ymd_opt(result_year, 1, 1)
    .ok_or_else(|| CommandError::InvalidDate(result_year.to_string()).to_string())?;

  let Some(band) = classify_for_skill_badge(birth_year, start_of_year.year()) else {
    return Ok(None);
  };

  Ok(
    state
      .evaluator
      .limits_for(discipline_id, birth_year, result_year)
      .map(|limits| SkillLimitsView {
        band,
        rule_version: state.evaluator.effective_version(band, start_of_year),
        limits,
      }),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::RulesConfig;

  fn state() -> RulesState {
    RulesState::new(RulesConfig::default())
  }

  #[test]
  fn test_calculate_skill_mark() {
    // 60m hurdles, 12 years old in 2025
    let tier = calculate_skill_mark(&state(), 12.00, 16, 2013, "2025-06-01".into()).unwrap();
    assert_eq!(tier, Some(SkillTier::Mid));
  }

  #[test]
  fn test_calculate_skill_mark_not_applicable() {
    let tier = calculate_skill_mark(&state(), 12.00, 999, 2013, "2025-06-01".into()).unwrap();
    assert_eq!(tier, None);
  }

  #[test]
  fn test_calculate_skill_mark_extreme_birth_year() {
    for birth_year in [i32::MIN, i32::MAX] {
      let tier = calculate_skill_mark(&state(), 1.0, 1, birth_year, "2025-06-15".into()).unwrap();
      assert_eq!(tier, None);
    }
  }

  #[test]
  fn test_calculate_skill_mark_bad_date() {
    let err = calculate_skill_mark(&state(), 12.00, 16, 2013, "June".into()).unwrap_err();
    assert!(err.starts_with("Invalid date"));
    let err =
      calculate_skill_mark(&state(), 12.00, 16, 2013, "2025-06-15garbage".into()).unwrap_err();
    assert!(err.starts_with("Invalid date"));
  }

  #[test]
  fn test_tier_serializes_as_letter() {
    let tier = calculate_skill_mark(&state(), 12.00, 16, 2013, "2025-06-01".into()).unwrap();
    assert_eq!(serde_json::to_value(tier).unwrap(), serde_json::json!("B"));
  }

  #[test]
  fn test_get_skill_limits_current_t8() {
    // Shot put, 8 years old in 2026
    let view = get_skill_limits(&state(), 26, 2018, 2026).unwrap().unwrap();
    assert_eq!(view.band, SkillAgeCategory::T8);
    assert_eq!(view.rule_version, RuleVersion::Current);
  }

  #[test]
  fn test_get_skill_limits_unpublished_band_reports_legacy() {
    // 60m hurdles, 13 years old in 2026
    let view = get_skill_limits(&state(), 16, 2013, 2026).unwrap().unwrap();
    assert_eq!(view.band, SkillAgeCategory::T13);
    assert_eq!(view.rule_version, RuleVersion::Legacy);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["ruleVersion"], "legacy");
    assert!(json["limits"]["top"].is_number());
  }

  #[test]
  fn test_get_skill_limits_outside_bands() {
    assert!(get_skill_limits(&state(), 3, 1990, 2025).unwrap().is_none());
  }
}
