//! Discipline catalog
//!
//! Static registry of every event the application can record a result for.
//! Ids are stable and never reused; ordering everywhere is by id.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{
  Direction, Discipline, DisciplineCategory, DisciplineId, Implement, MeasurementUnit,
};

use DisciplineCategory::*;

/// ---------------------------------------------------------------------------
/// Reference data
/// ---------------------------------------------------------------------------

const fn timed(
  id: DisciplineId,
  name: &'static str,
  full_name: &'static str,
  category: DisciplineCategory,
  needs_minutes: bool,
  wind_affected: bool,
) -> Discipline {
  Discipline {
    id,
    name,
    full_name,
    category,
    unit: MeasurementUnit::Duration,
    direction: Direction::LowerIsBetter,
    needs_minutes,
    wind_affected,
    implement: None,
  }
}

const fn measured(
  id: DisciplineId,
  name: &'static str,
  full_name: &'static str,
  category: DisciplineCategory,
  wind_affected: bool,
  implement: Option<Implement>,
) -> Discipline {
  Discipline {
    id,
    name,
    full_name,
    category,
    // Combined events are points but share the larger-is-better handling
    unit: MeasurementUnit::Distance,
    direction: Direction::HigherIsBetter,
    needs_minutes: false,
    wind_affected,
    implement,
  }
}

static DISCIPLINES: [Discipline; 41] = [
  // Sprints
  timed(1, "40m", "40 metres", Sprints, false, false),
  timed(2, "60m", "60 metres", Sprints, false, true),
  timed(3, "100m", "100 metres", Sprints, false, true),
  timed(4, "150m", "150 metres", Sprints, false, false),
  timed(5, "200m", "200 metres", Sprints, false, true),
  timed(6, "300m", "300 metres", Sprints, false, false),
  timed(7, "400m", "400 metres", Sprints, true, false),
  // Middle distance
  timed(8, "600m", "600 metres", MiddleDistance, true, false),
  timed(9, "800m", "800 metres", MiddleDistance, true, false),
  timed(10, "1000m", "1000 metres", MiddleDistance, true, false),
  timed(11, "1500m", "1500 metres", MiddleDistance, true, false),
  timed(12, "2000m", "2000 metres", MiddleDistance, true, false),
  // Long distance
  timed(13, "3000m", "3000 metres", LongDistance, true, false),
  timed(14, "5000m", "5000 metres", LongDistance, true, false),
  timed(15, "10000m", "10000 metres", LongDistance, true, false),
  // Hurdles
  timed(16, "60m H", "60 metres hurdles", Hurdles, false, true),
  timed(17, "80m H", "80 metres hurdles", Hurdles, false, true),
  timed(18, "100m H", "100 metres hurdles", Hurdles, false, true),
  timed(19, "200m H", "200 metres hurdles", Hurdles, false, false),
  timed(20, "300m H", "300 metres hurdles", Hurdles, false, false),
  timed(21, "400m H", "400 metres hurdles", Hurdles, true, false),
  // Jumps
  measured(22, "LJ", "Long jump", Jumps, true, None),
  measured(23, "HJ", "High jump", Jumps, false, None),
  measured(24, "TJ", "Triple jump", Jumps, true, None),
  measured(25, "PV", "Pole vault", Jumps, false, None),
  // Throws
  measured(26, "SP", "Shot put", Throws, false, Some(Implement::Shot)),
  measured(27, "DT", "Discus throw", Throws, false, Some(Implement::Discus)),
  measured(28, "JT", "Javelin throw", Throws, false, Some(Implement::Javelin)),
  measured(29, "HT", "Hammer throw", Throws, false, Some(Implement::Hammer)),
  measured(30, "BT", "Ball throw", Throws, false, None),
  // Combined events (points)
  measured(31, "3-event", "Triathlon", Combined, false, None),
  measured(32, "4-event", "Tetrathlon", Combined, false, None),
  measured(33, "5-event", "Pentathlon", Combined, false, None),
  measured(34, "7-event", "Heptathlon", Combined, false, None),
  // Race walking
  timed(35, "600m W", "600 metres race walk", Walking, true, false),
  timed(36, "800m W", "800 metres race walk", Walking, true, false),
  timed(37, "2000m W", "2000 metres race walk", Walking, true, false),
  timed(38, "3000m W", "3000 metres race walk", Walking, true, false),
  // Steeplechase
  timed(39, "1500m SC", "1500 metres steeplechase", MiddleDistance, true, false),
  timed(40, "3000m SC", "3000 metres steeplechase", LongDistance, true, false),
  timed(41, "1000m W", "1000 metres race walk", Walking, true, false),
];

/// Selectable implement weights in kilograms, lightest first
const SHOT_WEIGHTS_KG: &[f64] = &[2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 7.26];
const DISCUS_WEIGHTS_KG: &[f64] = &[0.6, 0.75, 1.0, 1.5, 1.75, 2.0];
const JAVELIN_WEIGHTS_KG: &[f64] = &[0.4, 0.5, 0.6, 0.7, 0.8];
const HAMMER_WEIGHTS_KG: &[f64] = &[2.5, 3.0, 4.0, 5.0, 6.0, 7.26];

/// Hurdle heights in centimetres, lowest first
pub const HURDLE_HEIGHTS_CM: [u32; 8] = [50, 60, 68, 76, 84, 91, 100, 106];

/// ---------------------------------------------------------------------------
/// Catalog
/// ---------------------------------------------------------------------------

pub struct DisciplineCatalog {
  disciplines: &'static [Discipline],
  by_id: HashMap<DisciplineId, usize>,
}

static CATALOG: LazyLock<DisciplineCatalog> =
  LazyLock::new(|| DisciplineCatalog::from_static(&DISCIPLINES));

impl DisciplineCatalog {
  fn from_static(disciplines: &'static [Discipline]) -> Self {
    let by_id = disciplines
      .iter()
      .enumerate()
      .map(|(idx, d)| (d.id, idx))
      .collect();
    Self { disciplines, by_id }
  }

  /// Process-wide catalog, built on first use
  pub fn global() -> &'static DisciplineCatalog {
    &CATALOG
  }

  pub fn get(&self, id: DisciplineId) -> Option<&'static Discipline> {
    let disciplines = self.disciplines;
    self.by_id.get(&id).map(|&idx| &disciplines[idx])
  }

  pub fn contains(&self, id: DisciplineId) -> bool {
    self.by_id.contains_key(&id)
  }

  /// All disciplines ordered by id
  pub fn all(&self) -> &'static [Discipline] {
    self.disciplines
  }

  /// Disciplines grouped in display order; empty groups are skipped
  pub fn by_category(&self) -> Vec<(DisciplineCategory, Vec<&'static Discipline>)> {
    group_by_category(self.disciplines.iter())
  }
}

/// Group disciplines by category in `DisciplineCategory::ORDER`, keeping
/// id order inside each group
pub fn group_by_category<'a, I>(disciplines: I) -> Vec<(DisciplineCategory, Vec<&'a Discipline>)>
where
  I: IntoIterator<Item = &'a Discipline>,
{
  let mut grouped: HashMap<DisciplineCategory, Vec<&'a Discipline>> = HashMap::new();
  for discipline in disciplines {
    grouped.entry(discipline.category).or_default().push(discipline);
  }

  DisciplineCategory::ORDER
    .iter()
    .filter_map(|category| {
      let mut members = grouped.remove(category)?;
      members.sort_by_key(|d| d.id);
      Some((*category, members))
    })
    .collect()
}

pub fn get_discipline(id: DisciplineId) -> Option<&'static Discipline> {
  DisciplineCatalog::global().get(id)
}

/// Implement weights the athlete can choose from; empty for non-throws
pub fn equipment_weights(id: DisciplineId) -> &'static [f64] {
  match get_discipline(id).and_then(|d| d.implement) {
    Some(Implement::Shot) => SHOT_WEIGHTS_KG,
    Some(Implement::Discus) => DISCUS_WEIGHTS_KG,
    Some(Implement::Javelin) => JAVELIN_WEIGHTS_KG,
    Some(Implement::Hammer) => HAMMER_WEIGHTS_KG,
    None => &[],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ids_are_unique_and_sorted() {
    let all = DisciplineCatalog::global().all();
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(DisciplineCatalog::global().by_id.len(), all.len());
  }

  #[test]
  fn test_lookup() {
    let sprint = get_discipline(3).unwrap();
    assert_eq!(sprint.name, "100m");
    assert_eq!(sprint.unit, MeasurementUnit::Duration);
    assert_eq!(sprint.direction, Direction::LowerIsBetter);

    let shot = get_discipline(26).unwrap();
    assert_eq!(shot.direction, Direction::HigherIsBetter);
    assert_eq!(shot.implement, Some(Implement::Shot));
  }

  #[test]
  fn test_unknown_id_is_none() {
    assert!(get_discipline(0).is_none());
    assert!(get_discipline(999).is_none());
    assert!(!DisciplineCatalog::global().contains(42));
  }

  #[test]
  fn test_direction_matches_unit() {
    for d in DisciplineCatalog::global().all() {
      let expected = match d.unit {
        MeasurementUnit::Duration => Direction::LowerIsBetter,
        MeasurementUnit::Distance => Direction::HigherIsBetter,
      };
      assert_eq!(d.direction, expected, "discipline {}", d.id);
      // Only timed events take a minutes field
      assert!(!d.needs_minutes || d.unit == MeasurementUnit::Duration);
    }
  }

  #[test]
  fn test_grouping_follows_display_order() {
    let grouped = DisciplineCatalog::global().by_category();
    let categories: Vec<_> = grouped.iter().map(|(c, _)| *c).collect();
    assert_eq!(categories, DisciplineCategory::ORDER.to_vec());

    let middle = &grouped[1].1;
    let ids: Vec<_> = middle.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![8, 9, 10, 11, 12, 39]);
  }

  #[test]
  fn test_equipment_weights() {
    assert_eq!(equipment_weights(26).first(), Some(&2.0));
    assert!(equipment_weights(29).contains(&2.5));
    assert!(equipment_weights(3).is_empty());
    assert!(equipment_weights(999).is_empty());
    for id in [26, 27, 28, 29] {
      assert!(equipment_weights(id).windows(2).all(|w| w[0] < w[1]));
    }
  }
}
