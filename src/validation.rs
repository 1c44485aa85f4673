//! Static reference data validation
//!
//! Malformed tables are data defects, not runtime conditions. The test suite
//! runs these checks exhaustively; hosts may also run them at startup.

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::catalog::DisciplineCatalog;
use crate::config::RulesConfig;
use crate::eligibility::EligibilityRegistry;
use crate::models::{AgeCategory, DisciplineId, RuleVersion, SkillAgeCategory, SkillKey};
use crate::skill_limits::SkillLimitTables;

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DataDefect {
  #[error("Eligibility for {category} references unknown discipline {discipline_id}")]
  UnknownEligibleDiscipline {
    category: AgeCategory,
    discipline_id: DisciplineId,
  },

  #[error("Skill key mapping references unknown discipline {discipline_id}")]
  UnknownMappedDiscipline { discipline_id: DisciplineId },

  #[error("Discipline {discipline_id} maps to {skill_key:?} in {band} but directions disagree")]
  DirectionMismatch {
    discipline_id: DisciplineId,
    band: SkillAgeCategory,
    skill_key: SkillKey,
  },

  #[error("Skill key {skill_key:?} for {band} has no row in any rule version")]
  OrphanSkillKey {
    band: SkillAgeCategory,
    skill_key: SkillKey,
  },

  #[error("Limits for {skill_key:?} in {band} ({version}) are not monotonic")]
  NonMonotonic {
    version: RuleVersion,
    band: SkillAgeCategory,
    skill_key: SkillKey,
  },
}

#[derive(Debug, Error)]
#[error("{} static data defect(s)", .0.len())]
pub struct InvalidReferenceData(pub Vec<DataDefect>);

/// ---------------------------------------------------------------------------
/// Checks
/// ---------------------------------------------------------------------------

fn check_eligibility(
  catalog: &DisciplineCatalog,
  registry: &EligibilityRegistry,
  defects: &mut Vec<DataDefect>,
) {
  for (category, discipline_id) in registry.entries() {
    if !catalog.contains(discipline_id) {
      defects.push(DataDefect::UnknownEligibleDiscipline {
        category,
        discipline_id,
      });
    }
  }
}

fn check_skill_mappings(
  catalog: &DisciplineCatalog,
  tables: &SkillLimitTables,
  defects: &mut Vec<DataDefect>,
) {
  for (discipline_id, band, skill_key) in tables.mappings() {
    let Some(discipline) = catalog.get(discipline_id) else {
      defects.push(DataDefect::UnknownMappedDiscipline { discipline_id });
      continue;
    };

    if discipline.direction != skill_key.direction() {
      defects.push(DataDefect::DirectionMismatch {
        discipline_id,
        band,
        skill_key,
      });
    }

    let has_row = RuleVersion::ALL
      .iter()
      .any(|version| tables.limit(*version, band, skill_key).is_some());
    if !has_row {
      defects.push(DataDefect::OrphanSkillKey { band, skill_key });
    }
  }
}

fn check_monotonic(tables: &SkillLimitTables, defects: &mut Vec<DataDefect>) {
  for ((version, band, skill_key), limit) in tables.limits() {
    if !limit.is_monotonic(skill_key.direction()) {
      defects.push(DataDefect::NonMonotonic {
        version: *version,
        band: *band,
        skill_key: *skill_key,
      });
    }
  }
}

/// Every defect found in the given tables, in a stable order
pub fn validate(
  catalog: &DisciplineCatalog,
  registry: &EligibilityRegistry,
  tables: &SkillLimitTables,
) -> Vec<DataDefect> {
  let mut defects = Vec::new();
  check_eligibility(catalog, registry, &mut defects);
  check_skill_mappings(catalog, tables, &mut defects);
  check_monotonic(tables, &mut defects);
  defects.sort_by_key(|d| d.to_string());
  defects.dedup();
  defects
}

/// Every defect found in the process-wide static tables
pub fn validate_all() -> Vec<DataDefect> {
  validate(
    DisciplineCatalog::global(),
    EligibilityRegistry::global(),
    SkillLimitTables::global(),
  )
}

/// Startup check. Defects are logged; in strict mode they are also returned
/// as an error.
pub fn check_at_startup(config: &RulesConfig) -> Result<(), InvalidReferenceData> {
  let defects = validate_all();
  if defects.is_empty() {
    return Ok(());
  }

  for defect in &defects {
    warn!(%defect, "Static rules data defect");
  }

  if config.strict_data {
    Err(InvalidReferenceData(defects))
  } else {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{Direction, SkillLimit};
  use crate::skill_limits::row;

  fn registry(entries: &[(AgeCategory, &[DisciplineId])]) -> EligibilityRegistry {
    EligibilityRegistry::from_entries(entries)
  }

  fn no_eligibility() -> EligibilityRegistry {
    registry(&[])
  }

  fn run(registry: &EligibilityRegistry, tables: &SkillLimitTables) -> Vec<DataDefect> {
    validate(DisciplineCatalog::global(), registry, tables)
  }

  #[test]
  fn test_reference_data_has_no_defects() {
    let defects = validate_all();
    assert!(defects.is_empty(), "defects: {:#?}", defects);
  }

  #[test]
  fn test_strict_startup_passes_with_clean_data() {
    let config = RulesConfig {
      strict_data: true,
      ..RulesConfig::default()
    };
    assert!(check_at_startup(&config).is_ok());
  }

  #[test]
  fn test_non_monotonic_row_is_detected() {
    // Swapped A and C for a timed row
    let swapped = SkillLimit::new(9.75, 9.45, 9.10);
    assert!(!swapped.is_monotonic(Direction::LowerIsBetter));

    let tables = SkillLimitTables::from_rows(
      &[row(SkillAgeCategory::T11, SkillKey::Run60m, 9.75, 9.45, 9.10)],
      &[],
      &[(2, [None, None, Some(SkillKey::Run60m), None, None])],
    );
    assert_eq!(
      run(&no_eligibility(), &tables),
      vec![DataDefect::NonMonotonic {
        version: RuleVersion::Legacy,
        band: SkillAgeCategory::T11,
        skill_key: SkillKey::Run60m,
      }]
    );
  }

  #[test]
  fn test_unknown_eligible_discipline_is_detected() {
    let tables = SkillLimitTables::from_rows(&[], &[], &[]);
    let defects = run(&registry(&[(AgeCategory::Age9, &[1, 77])]), &tables);
    assert_eq!(
      defects,
      vec![DataDefect::UnknownEligibleDiscipline {
        category: AgeCategory::Age9,
        discipline_id: 77,
      }]
    );
  }

  #[test]
  fn test_unknown_mapped_discipline_is_detected() {
    let tables = SkillLimitTables::from_rows(
      &[row(SkillAgeCategory::T8, SkillKey::LongJump, 3.30, 3.10, 2.85)],
      &[],
      &[(500, [Some(SkillKey::LongJump), None, None, None, None])],
    );
    assert_eq!(
      run(&no_eligibility(), &tables),
      vec![DataDefect::UnknownMappedDiscipline { discipline_id: 500 }]
    );
  }

  #[test]
  fn test_direction_mismatch_is_detected() {
    // 100m judged against a long jump row
    let tables = SkillLimitTables::from_rows(
      &[row(SkillAgeCategory::T15, SkillKey::LongJump, 5.40, 5.00, 4.60)],
      &[],
      &[(3, [None, None, None, None, Some(SkillKey::LongJump)])],
    );
    assert_eq!(
      run(&no_eligibility(), &tables),
      vec![DataDefect::DirectionMismatch {
        discipline_id: 3,
        band: SkillAgeCategory::T15,
        skill_key: SkillKey::LongJump,
      }]
    );
  }

  #[test]
  fn test_orphan_skill_key_is_detected() {
    // Row exists for T8 only, mapping also claims T9
    let tables = SkillLimitTables::from_rows(
      &[],
      &[row(SkillAgeCategory::T8, SkillKey::Run40m, 7.20, 7.35, 7.80)],
      &[(1, [Some(SkillKey::Run40m), Some(SkillKey::Run40m), None, None, None])],
    );
    assert_eq!(
      run(&no_eligibility(), &tables),
      vec![DataDefect::OrphanSkillKey {
        band: SkillAgeCategory::T9,
        skill_key: SkillKey::Run40m,
      }]
    );
  }

  #[test]
  fn test_every_defect_is_reported() {
    let tables = SkillLimitTables::from_rows(&[], &[], &[]);
    let defects = run(&registry(&[(AgeCategory::Age9, &[77, 78])]), &tables);
    assert_eq!(defects.len(), 2);
    assert_eq!(
      InvalidReferenceData(defects).to_string(),
      "2 static data defect(s)"
    );
  }

  #[test]
  fn test_defect_messages() {
    let defect = DataDefect::UnknownEligibleDiscipline {
      category: AgeCategory::Age9,
      discipline_id: 77,
    };
    assert_eq!(
      defect.to_string(),
      "Eligibility for 9 references unknown discipline 77"
    );
    let report = InvalidReferenceData(vec![defect]);
    assert!(report.to_string().starts_with("1 static data defect(s)"));
  }
}
