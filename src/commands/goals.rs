use super::CommandError;
use crate::goals::{Goal, GoalProgress};
use crate::models::DisciplineId;

pub fn calculate_goal_progress(
  discipline_id: DisciplineId,
  target_value: f64,
  current_best: Option<f64>,
) -> Result<GoalProgress, String> {
  Goal::new(discipline_id, target_value)
    .progress(current_best)
    .ok_or_else(|| CommandError::UnknownDiscipline(discipline_id).to_string())
}

/// Progress computed from the athlete's raw results in the discipline
pub fn calculate_goal_progress_from_results(
  discipline_id: DisciplineId,
  target_value: f64,
  results: Vec<f64>,
) -> Result<GoalProgress, String> {
  Goal::new(discipline_id, target_value)
    .progress_from_results(&results)
    .ok_or_else(|| CommandError::UnknownDiscipline(discipline_id).to_string())
}
