//! Commands backing the discipline pickers

use chrono::Datelike;
use serde::Serialize;

use super::{parse_date, CommandError, RulesState};
use crate::age::classify;
use crate::catalog::{equipment_weights, DisciplineCatalog, HURDLE_HEIGHTS_CM};
use crate::eligibility::EligibilityRegistry;
use crate::models::{AgeCategory, Discipline, DisciplineCategory, DisciplineId};
use crate::records::is_wind_assisted;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineGroup {
  pub category: DisciplineCategory,
  pub disciplines: Vec<Discipline>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteDisciplines {
  pub age_category: AgeCategory,
  pub age_category_code: &'static str,
  pub groups: Vec<DisciplineGroup>,
}

fn to_groups(grouped: Vec<(DisciplineCategory, Vec<&'static Discipline>)>) -> Vec<DisciplineGroup> {
  grouped
    .into_iter()
    .map(|(category, disciplines)| DisciplineGroup {
      category,
      disciplines: disciplines.into_iter().cloned().collect(),
    })
    .collect()
}

/// Every discipline, grouped for the "show all" view
pub fn get_all_disciplines() -> Result<Vec<DisciplineGroup>, String> {
  Ok(to_groups(DisciplineCatalog::global().by_category()))
}

/// Disciplines sanctioned for an athlete's age on `date` (default: today)
pub fn get_disciplines_for_athlete(
  state: &RulesState,
  birth_year: i32,
  date: Option<String>,
) -> Result<AthleteDisciplines, String> {
  let as_of = match date.as_deref() {
    Some(raw) => parse_date(raw).map_err(|e| e.to_string())?,
    None => state.config.today(),
  };
  let age_category = classify(birth_year, as_of);
  let grouped = EligibilityRegistry::global().disciplines_by_category_for_age(age_category);

  Ok(AthleteDisciplines {
    age_category,
    age_category_code: age_category.code(),
    groups: to_groups(grouped),
  })
}

pub fn get_equipment_weights(discipline_id: DisciplineId) -> Result<Vec<f64>, String> {
  if !DisciplineCatalog::global().contains(discipline_id) {
    return Err(CommandError::UnknownDiscipline(discipline_id).to_string());
  }
  Ok(equipment_weights(discipline_id).to_vec())
}

/// Selectable hurdle heights for the result form
pub fn get_hurdle_heights() -> Result<Vec<u32>, String> {
  Ok(HURDLE_HEIGHTS_CM.to_vec())
}

pub fn check_wind_assisted(
  wind: Option<f64>,
  discipline_id: DisciplineId,
  birth_year: i32,
  result_date: String,
) -> Result<bool, String> {
  let date = parse_date(&result_date).map_err(|e| e.to_string())?;
  Ok(is_wind_assisted(
    wind,
    discipline_id,
    birth_year,
    date.year(),
  ))
}
