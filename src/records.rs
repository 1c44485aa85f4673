//! Record eligibility rules that depend only on the result itself

use tracing::debug;

use crate::age::age_in_year;
use crate::catalog::get_discipline;
use crate::models::DisciplineId;

/// Maximum legal tailwind for records (m/s)
pub const WIND_LIMIT: f64 = 2.0;

/// Wind rules apply from this age onwards
pub const WIND_RULE_AGE_THRESHOLD: i32 = 14;

/// True when a tailwind makes the result ineligible for records.
///
/// Only wind-affected disciplines count, only for athletes aged 14 or more in
/// the result year, and a missing wind reading never disqualifies.
pub fn is_wind_assisted(
  wind: Option<f64>,
  discipline_id: DisciplineId,
  birth_year: i32,
  result_year: i32,
) -> bool {
  let Some(discipline) = get_discipline(discipline_id) else {
    return false;
  };
  if !discipline.wind_affected {
    return false;
  }

  if age_in_year(birth_year, result_year) < WIND_RULE_AGE_THRESHOLD {
    return false;
  }

  let assisted = matches!(wind, Some(w) if w > WIND_LIMIT);
  if assisted {
    debug!(discipline_id, ?wind, "Result is wind assisted");
  }
  assisted
}
