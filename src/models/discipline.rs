use serde::{Deserialize, Serialize};

/// Stable discipline identifier. Ids are never reused.
pub type DisciplineId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisciplineCategory {
  Sprints,
  MiddleDistance,
  LongDistance,
  Hurdles,
  Jumps,
  Throws,
  Combined,
  Walking,
}

impl DisciplineCategory {
  /// Display order used when grouping disciplines for selection lists
  pub const ORDER: [DisciplineCategory; 8] = [
    DisciplineCategory::Sprints,
    DisciplineCategory::MiddleDistance,
    DisciplineCategory::LongDistance,
    DisciplineCategory::Hurdles,
    DisciplineCategory::Jumps,
    DisciplineCategory::Throws,
    DisciplineCategory::Combined,
    DisciplineCategory::Walking,
  ];
}

/// Canonical unit a discipline's results are stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeasurementUnit {
  /// Seconds
  Duration,
  /// Meters, or points for combined events
  Distance,
}

/// Whether a smaller or a larger value is the better performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
  LowerIsBetter,
  HigherIsBetter,
}

impl Direction {
  /// True when `a` is at least as good as `b`
  pub fn at_least_as_good(&self, a: f64, b: f64) -> bool {
    match self {
      Direction::LowerIsBetter => a <= b,
      Direction::HigherIsBetter => a >= b,
    }
  }

  /// True when `a` is strictly better than `b`
  pub fn is_better(&self, a: f64, b: f64) -> bool {
    match self {
      Direction::LowerIsBetter => a < b,
      Direction::HigherIsBetter => a > b,
    }
  }
}

/// Throwing implement, used to look up selectable weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Implement {
  Shot,
  Discus,
  Javelin,
  Hammer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
  pub id: DisciplineId,
  /// Short name like "100m"
  pub name: &'static str,
  pub full_name: &'static str,
  pub category: DisciplineCategory,
  pub unit: MeasurementUnit,
  pub direction: Direction,
  /// Time entry needs a minutes field
  pub needs_minutes: bool,
  /// Wind reading affects record eligibility
  pub wind_affected: bool,
  pub implement: Option<Implement>,
}
