//! Which disciplines are sanctioned in each general age category

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use crate::catalog::{group_by_category, DisciplineCatalog};
use crate::models::{AgeCategory, Discipline, DisciplineCategory, DisciplineId};

/// ---------------------------------------------------------------------------
/// Reference data
/// ---------------------------------------------------------------------------

const PRE_COMPETITIVE: &[DisciplineId] = &[1, 22, 30];

const AGE_8: &[DisciplineId] = &[
  1, 4, 9, 10, 16, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 35, 36,
];

const AGE_9_10: &[DisciplineId] = &[
  1, 2, 4, 8, 10, 16, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 35,
];

const AGE_11_12: &[DisciplineId] = &[
  2, 4, 5, 8, 10, 16, 22, 23, 24, 25, 26, 27, 28, 29, 31, 32, 41,
];

const AGE_13_14: &[DisciplineId] = &[
  2, 3, 5, 6, 9, 10, 11, 12, 13, 16, 17, 19, 20, 22, 23, 24, 25, 26, 27, 28, 29, 32, 33, 37, 39,
];

const AGE_15: &[DisciplineId] = &[
  2, 3, 5, 6, 7, 9, 11, 12, 13, 17, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 33, 34, 38, 39,
];

const AGE_17: &[DisciplineId] = &[
  2, 3, 5, 6, 7, 9, 11, 12, 13, 14, 17, 18, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 34, 38, 40,
];

const SENIOR: &[DisciplineId] = &[
  2, 3, 5, 7, 9, 11, 13, 14, 15, 18, 21, 22, 23, 24, 25, 26, 27, 28, 29, 34, 38, 40,
];

/// Categories without an entry (the youngest band) have no sanctioned events
const ENTRIES: &[(AgeCategory, &[DisciplineId])] = &[
  (AgeCategory::Age4, PRE_COMPETITIVE),
  (AgeCategory::Age5, PRE_COMPETITIVE),
  (AgeCategory::Age6, PRE_COMPETITIVE),
  (AgeCategory::Age7, PRE_COMPETITIVE),
  (AgeCategory::Age8, AGE_8),
  (AgeCategory::Age9, AGE_9_10),
  (AgeCategory::Age10, AGE_9_10),
  (AgeCategory::Age11, AGE_11_12),
  (AgeCategory::Age12, AGE_11_12),
  (AgeCategory::Age13, AGE_13_14),
  (AgeCategory::Age14, AGE_13_14),
  (AgeCategory::Age15, AGE_15),
  (AgeCategory::Age17, AGE_17),
  (AgeCategory::Age19, SENIOR),
  (AgeCategory::Age22, SENIOR),
  (AgeCategory::Adult, SENIOR),
];

/// ---------------------------------------------------------------------------
/// Registry
/// ---------------------------------------------------------------------------

pub struct EligibilityRegistry {
  by_category: HashMap<AgeCategory, BTreeSet<DisciplineId>>,
}

static REGISTRY: LazyLock<EligibilityRegistry> =
  LazyLock::new(|| EligibilityRegistry::from_entries(ENTRIES));

impl EligibilityRegistry {
  pub(crate) fn from_entries(entries: &[(AgeCategory, &[DisciplineId])]) -> Self {
    let by_category = entries
      .iter()
      .map(|(category, ids)| (*category, ids.iter().copied().collect()))
      .collect();
    Self { by_category }
  }

  pub fn global() -> &'static EligibilityRegistry {
    &REGISTRY
  }

  /// Sanctioned discipline ids for `category`, ascending
  pub fn ids_for_category(&self, category: AgeCategory) -> impl Iterator<Item = DisciplineId> + '_ {
    self.by_category.get(&category).into_iter().flatten().copied()
  }

  /// Sanctioned disciplines for `category`, ordered by id
  pub fn disciplines_for_category(&self, category: AgeCategory) -> Vec<&'static Discipline> {
    let catalog = DisciplineCatalog::global();
    self
      .ids_for_category(category)
      .filter_map(|id| catalog.get(id))
      .collect()
  }

  pub fn is_eligible(&self, discipline_id: DisciplineId, category: AgeCategory) -> bool {
    self
      .by_category
      .get(&category)
      .is_some_and(|ids| ids.contains(&discipline_id))
  }

  /// Sanctioned disciplines grouped in display order
  pub fn disciplines_by_category_for_age(
    &self,
    category: AgeCategory,
  ) -> Vec<(DisciplineCategory, Vec<&'static Discipline>)> {
    group_by_category(self.disciplines_for_category(category))
  }

  /// Every (category, id) pair in the registry, for data validation
  pub fn entries(&self) -> impl Iterator<Item = (AgeCategory, DisciplineId)> + '_ {
    self
      .by_category
      .iter()
      .flat_map(|(category, ids)| ids.iter().map(move |id| (*category, *id)))
  }
}

pub fn disciplines_for_category(category: AgeCategory) -> Vec<&'static Discipline> {
  EligibilityRegistry::global().disciplines_for_category(category)
}

pub fn is_eligible(discipline_id: DisciplineId, category: AgeCategory) -> bool {
  EligibilityRegistry::global().is_eligible(discipline_id, category)
}
