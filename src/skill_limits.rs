//! Skill mark limit tables (taitomerkkirajat)
//!
//! Reproduces the federation's published tables exactly. Times are seconds,
//! jumps and throws meters, combined events points.
//!
//! Two rule versions exist. The current (2026) tables are only published for
//! the youngest band so far; the other bands are declared but empty.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use serde::Serialize;

use crate::models::{DisciplineId, RuleVersion, SkillAgeCategory, SkillKey, SkillLimit};

use SkillAgeCategory::*;
use SkillKey::*;

pub(crate) type Row = (SkillAgeCategory, SkillKey, SkillLimit);

pub(crate) const fn row(category: SkillAgeCategory, key: SkillKey, a: f64, b: f64, c: f64) -> Row {
  (category, key, SkillLimit::new(a, b, c))
}

/// ---------------------------------------------------------------------------
/// 2014 limits, in force through 31.12.2025
/// ---------------------------------------------------------------------------

const LEGACY: &[Row] = &[
  // T8 was added in February 2025, same limits for girls and boys
  row(T8, Run40m, 7.20, 7.35, 7.80),
  row(T8, Run1000m, 247.0, 260.0, 280.0), // 4:07, 4:20, 4:40
  row(T8, Walk600m, 265.0, 305.0, 340.0), // 4:25, 5:05, 5:40
  row(T8, HighJump, 1.00, 0.90, 0.80),
  row(T8, PoleVault, 1.30, 1.10, 0.90),
  row(T8, LongJump, 3.30, 3.10, 2.85),
  row(T8, TripleJump, 7.30, 6.70, 6.00),
  row(T8, Shot2kg, 5.30, 4.70, 4.20),
  row(T8, Discus600g, 12.00, 9.00, 7.00),
  row(T8, Hammer2500g, 10.50, 8.50, 7.00),
  row(T8, Javelin400g, 13.50, 11.00, 8.50),
  row(T8, Triathlon, 450.0, 370.0, 270.0),
  row(T8, Tetrathlon, 490.0, 380.0, 290.0),
  // T9
  row(T9, Run40m, 6.95, 7.15, 7.45),
  row(T9, Run1000m, 242.0, 256.0, 274.0), // 4:02, 4:16, 4:34
  row(T9, Walk600m, 260.0, 270.0, 290.0),
  row(T9, HighJump, 1.06, 1.00, 0.90),
  row(T9, PoleVault, 1.30, 1.10, 0.90),
  row(T9, LongJump, 3.50, 3.30, 3.10),
  row(T9, TripleJump, 7.70, 7.10, 6.30),
  row(T9, Shot2kg, 5.80, 5.25, 4.75),
  row(T9, Discus600g, 14.00, 11.50, 8.50),
  row(T9, Hammer2500g, 14.00, 12.00, 8.50),
  row(T9, Javelin400g, 15.00, 13.00, 9.50),
  row(T9, Triathlon, 550.0, 450.0, 350.0),
  row(T9, Tetrathlon, 725.0, 600.0, 400.0),
  // T11
  row(T11, Run60m, 9.10, 9.45, 9.75),
  row(T11, Run1000m, 218.0, 233.0, 250.0), // 3:38, 3:53, 4:10
  row(T11, Hurdles60m, 11.10, 12.00, 13.20),
  row(T11, Walk1000m, 405.0, 445.0, 490.0), // 6:45, 7:25, 8:10
  row(T11, HighJump, 1.28, 1.19, 1.13),
  row(T11, PoleVault, 1.60, 1.35, 1.10),
  row(T11, LongJump, 4.20, 3.95, 3.70),
  row(T11, TripleJump, 8.60, 7.90, 7.10),
  row(T11, Shot2kg, 8.40, 7.50, 6.75),
  row(T11, Discus600g, 19.00, 15.00, 10.00),
  row(T11, Hammer2500g, 19.00, 15.00, 10.00),
  row(T11, Javelin400g, 23.00, 18.00, 12.00),
  row(T11, Triathlon, 850.0, 700.0, 550.0),
  row(T11, Tetrathlon, 1200.0, 1000.0, 725.0),
  // T13
  row(T13, Run60m, 8.65, 8.95, 9.40),
  row(T13, Run200m, 29.00, 30.50, 33.00),
  row(T13, Run1000m, 206.0, 222.0, 250.0), // 3:26, 3:42, 4:10
  row(T13, Hurdles60m, 10.60, 11.50, 13.30),
  row(T13, Hurdles200m, 34.00, 36.40, 40.00),
  row(T13, Walk2000m, 780.0, 870.0, 990.0), // 13:00, 14:30, 16:30
  row(T13, HighJump, 1.43, 1.34, 1.19),
  row(T13, PoleVault, 2.05, 1.80, 1.45),
  row(T13, LongJump, 4.55, 4.30, 3.80),
  row(T13, TripleJump, 9.40, 9.00, 7.80),
  row(T13, Shot3kg, 9.80, 8.90, 7.50),
  row(T13, Discus750g, 27.00, 22.00, 16.00),
  row(T13, Hammer3kg, 27.00, 22.00, 16.00),
  row(T13, Javelin500g, 29.00, 24.00, 17.50),
  row(T13, Tetrathlon, 1350.0, 1100.0, 750.0),
  row(T13, Pentathlon, 1750.0, 1425.0, 1050.0),
  // T15
  row(T15, Run100m, 13.40, 13.95, 14.80),
  row(T15, Run300m, 44.70, 46.80, 49.50),
  row(T15, Run800m, 153.0, 163.0, 173.0), // 2:33, 2:43, 2:53
  row(T15, Run2000m, 460.0, 490.0, 540.0), // 7:40, 8:10, 9:00
  row(T15, Steeplechase1500m, 380.0, 405.0, 440.0), // 6:20, 6:45, 7:20
  row(T15, Hurdles80m, 13.10, 13.95, 14.90),
  row(T15, Hurdles300m, 49.50, 52.00, 54.50),
  row(T15, Walk3000m, 1150.0, 1260.0, 1380.0), // 19:10, 21:00, 23:00
  row(T15, HighJump, 1.49, 1.39, 1.26),
  row(T15, PoleVault, 2.20, 1.95, 1.60),
  row(T15, LongJump, 4.90, 4.50, 3.90),
  row(T15, TripleJump, 10.20, 9.50, 8.60),
  row(T15, Shot3kg, 10.20, 9.40, 8.40),
  row(T15, Discus1kg, 28.00, 24.00, 19.00),
  row(T15, Hammer3kg, 32.00, 26.00, 21.00),
  row(T15, Javelin500g, 34.00, 29.00, 23.00),
  row(T15, Pentathlon, 1900.0, 1550.0, 1100.0),
];

/// ---------------------------------------------------------------------------
/// 2026 limits, in force from 1.1.2026
/// ---------------------------------------------------------------------------

// TODO: add T9, T11, T13 and T15 rows once the federation publishes the 2026 limits
const CURRENT: &[Row] = &[
  // T8: 150m, 800m, 60m hurdles and 800m walk are new for 2026
  row(T8, Run40m, 7.20, 7.35, 7.80),
  row(T8, Run150m, 27.30, 28.50, 30.50),
  row(T8, Run800m, 197.0, 207.0, 222.0), // 3:17, 3:27, 3:42
  row(T8, Hurdles60m, 13.20, 14.00, 15.80),
  row(T8, Walk800m, 380.0, 418.0, 485.0), // 6:20, 6:58, 8:05
  row(T8, HighJump, 1.00, 0.90, 0.80),
  row(T8, PoleVault, 1.30, 1.10, 0.90),
  row(T8, LongJump, 3.30, 3.10, 2.85),
  row(T8, TripleJump, 6.80, 6.00, 5.00),
  row(T8, Shot2kg, 4.70, 4.20, 3.80),
  row(T8, Discus600g, 10.00, 8.00, 6.00),
  row(T8, Hammer2500g, 9.00, 7.00, 5.00),
  row(T8, Javelin400g, 10.00, 8.00, 6.00),
  row(T8, Triathlon, 400.0, 300.0, 250.0),
  row(T8, Tetrathlon, 450.0, 350.0, 300.0),
];

/// ---------------------------------------------------------------------------
/// Discipline -> skill key, per skill-badge band (T8, T9, T11, T13, T15)
/// ---------------------------------------------------------------------------

pub(crate) type Mapping = (DisciplineId, [Option<SkillKey>; 5]);

const N: Option<SkillKey> = None;

const fn all(key: SkillKey) -> [Option<SkillKey>; 5] {
  [Some(key), Some(key), Some(key), Some(key), Some(key)]
}

const SKILL_KEYS: &[Mapping] = &[
  // Sprints
  (1, [Some(Run40m), Some(Run40m), N, N, N]),
  (2, [N, N, Some(Run60m), Some(Run60m), N]),
  (3, [N, N, N, N, Some(Run100m)]),
  (4, [Some(Run150m), N, N, N, N]),
  (5, [N, N, N, Some(Run200m), N]),
  (6, [N, N, N, N, Some(Run300m)]),
  // Middle distance
  (9, [Some(Run800m), N, N, N, Some(Run800m)]),
  (10, [Some(Run1000m), Some(Run1000m), Some(Run1000m), Some(Run1000m), N]),
  (12, [N, N, N, N, Some(Run2000m)]),
  (39, [N, N, N, N, Some(Steeplechase1500m)]),
  // Hurdles
  (16, [Some(Hurdles60m), N, Some(Hurdles60m), Some(Hurdles60m), N]),
  (17, [N, N, N, N, Some(Hurdles80m)]),
  (19, [N, N, N, Some(Hurdles200m), N]),
  (20, [N, N, N, N, Some(Hurdles300m)]),
  // Jumps
  (22, all(LongJump)),
  (23, all(HighJump)),
  (24, all(TripleJump)),
  (25, all(PoleVault)),
  // Throws: implement weight depends on age
  (26, [Some(Shot2kg), Some(Shot2kg), Some(Shot2kg), Some(Shot3kg), Some(Shot3kg)]),
  (
    27,
    [Some(Discus600g), Some(Discus600g), Some(Discus600g), Some(Discus750g), Some(Discus1kg)],
  ),
  (
    28,
    [Some(Javelin400g), Some(Javelin400g), Some(Javelin400g), Some(Javelin500g), Some(Javelin500g)],
  ),
  (
    29,
    [Some(Hammer2500g), Some(Hammer2500g), Some(Hammer2500g), Some(Hammer3kg), Some(Hammer3kg)],
  ),
  // Combined events
  (31, [Some(Triathlon), Some(Triathlon), Some(Triathlon), N, N]),
  (32, [Some(Tetrathlon), Some(Tetrathlon), Some(Tetrathlon), Some(Tetrathlon), N]),
  (33, [N, N, N, Some(Pentathlon), Some(Pentathlon)]),
  // Race walking
  (35, [Some(Walk600m), Some(Walk600m), N, N, N]),
  (36, [Some(Walk800m), N, N, N, N]),
  (41, [N, N, Some(Walk1000m), N, N]),
  (37, [N, N, N, Some(Walk2000m), N]),
  (38, [N, N, N, N, Some(Walk3000m)]),
];

fn band_index(category: SkillAgeCategory) -> usize {
  match category {
    T8 => 0,
    T9 => 1,
    T11 => 2,
    T13 => 3,
    T15 => 4,
  }
}

/// ---------------------------------------------------------------------------
/// Flat lookup tables
/// ---------------------------------------------------------------------------

pub type LimitKey = (RuleVersion, SkillAgeCategory, SkillKey);

pub struct SkillLimitTables {
  limits: HashMap<LimitKey, SkillLimit>,
  keys: HashMap<DisciplineId, [Option<SkillKey>; 5]>,
}

static TABLES: LazyLock<SkillLimitTables> = LazyLock::new(SkillLimitTables::build);

impl SkillLimitTables {
  fn build() -> Self {
    Self::from_rows(LEGACY, CURRENT, SKILL_KEYS)
  }

  pub(crate) fn from_rows(legacy: &[Row], current: &[Row], mappings: &[Mapping]) -> Self {
    let versions = [(RuleVersion::Legacy, legacy), (RuleVersion::Current, current)];
    let limits = versions
      .iter()
      .flat_map(|(version, rows)| {
        rows
          .iter()
          .map(move |(category, key, limit)| ((*version, *category, *key), *limit))
      })
      .collect();
    let keys = mappings.iter().copied().collect();
    Self { limits, keys }
  }

  pub fn global() -> &'static SkillLimitTables {
    &TABLES
  }

  /// Threshold row for the composite key, if the federation publishes one
  pub fn limit(
    &self,
    version: RuleVersion,
    category: SkillAgeCategory,
    key: SkillKey,
  ) -> Option<SkillLimit> {
    self.limits.get(&(version, category, key)).copied()
  }

  /// Skill key a discipline is judged against in `category`
  pub fn skill_key(
    &self,
    discipline_id: DisciplineId,
    category: SkillAgeCategory,
  ) -> Option<SkillKey> {
    self.keys.get(&discipline_id)?[band_index(category)]
  }

  /// True when `version` has at least one published row for `category`
  pub fn is_populated(&self, version: RuleVersion, category: SkillAgeCategory) -> bool {
    self
      .limits
      .keys()
      .any(|(v, c, _)| *v == version && *c == category)
  }

  pub fn limits(&self) -> impl Iterator<Item = (&LimitKey, &SkillLimit)> + '_ {
    self.limits.iter()
  }

  pub fn mappings(
    &self,
  ) -> impl Iterator<Item = (DisciplineId, SkillAgeCategory, SkillKey)> + '_ {
    self.keys.iter().flat_map(|(id, keys)| {
      SkillAgeCategory::ALL
        .iter()
        .zip(keys.iter())
        .filter_map(move |(category, key)| key.map(|k| (*id, *category, k)))
    })
  }
}

fn rows_for(version: RuleVersion) -> &'static [Row] {
  match version {
    RuleVersion::Legacy => LEGACY,
    RuleVersion::Current => CURRENT,
  }
}

/// ---------------------------------------------------------------------------
/// Export
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ExportedTables {
  legacy: BTreeMap<String, BTreeMap<&'static str, SkillLimit>>,
  current: BTreeMap<String, BTreeMap<&'static str, SkillLimit>>,
}

fn export_rows(version: RuleVersion) -> BTreeMap<String, BTreeMap<&'static str, SkillLimit>> {
  // Declared bands appear even when empty
  let mut out: BTreeMap<String, BTreeMap<&'static str, SkillLimit>> = SkillAgeCategory::ALL
    .iter()
    .map(|c| (c.to_string(), BTreeMap::new()))
    .collect();
  for (category, key, limit) in rows_for(version) {
    out
      .entry(category.to_string())
      .or_default()
      .insert(key.as_str(), *limit);
  }
  out
}

/// Both rule versions as pretty JSON keyed the way the federation publishes
/// them, for diffing against official tables
pub fn export_tables_json() -> Result<String, serde_json::Error> {
  let tables = ExportedTables {
    legacy: export_rows(RuleVersion::Legacy),
    current: export_rows(RuleVersion::Current),
  };
  serde_json::to_string_pretty(&tables)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_no_duplicate_rows() {
    let tables = SkillLimitTables::global();
    assert_eq!(tables.limits.len(), LEGACY.len() + CURRENT.len());
  }

  #[test]
  fn test_shot_put_implement_changes_with_age() {
    let tables = SkillLimitTables::global();
    assert_eq!(tables.skill_key(26, T11), Some(Shot2kg));
    assert_eq!(tables.skill_key(26, T13), Some(Shot3kg));
    assert_eq!(tables.skill_key(27, T15), Some(Discus1kg));
  }

  #[test]
  fn test_unmapped_discipline() {
    let tables = SkillLimitTables::global();
    assert_eq!(tables.skill_key(3, T9), None);
    assert_eq!(tables.skill_key(999, T9), None);
  }

  #[test]
  fn test_population() {
    let tables = SkillLimitTables::global();
    for category in SkillAgeCategory::ALL {
      assert!(tables.is_populated(RuleVersion::Legacy, category));
    }
    assert!(tables.is_populated(RuleVersion::Current, T8));
    assert!(!tables.is_populated(RuleVersion::Current, T13));
  }

  #[test]
  fn test_published_values() {
    let tables = SkillLimitTables::global();
    assert_eq!(
      tables.limit(RuleVersion::Legacy, T15, Run100m),
      Some(SkillLimit::new(13.40, 13.95, 14.80))
    );
    assert_eq!(
      tables.limit(RuleVersion::Current, T8, Shot2kg),
      Some(SkillLimit::new(4.70, 4.20, 3.80))
    );
    assert_eq!(tables.limit(RuleVersion::Current, T15, Run100m), None);
  }

  #[test]
  fn test_export_includes_declared_empty_bands() {
    let json = export_tables_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["legacy"]["T11"]["60m_aj"]["mid"], 12.0);
    assert!(value["current"]["T15"].as_object().unwrap().is_empty());
    assert_eq!(value["current"]["T8"]["800m_kavely"]["top"], 380.0);
  }
}
