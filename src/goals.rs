//! Goal progress
//!
//! Percentage of the way from a starting point to a personal target:
//! - larger-is-better events start from zero
//! - smaller-is-better events have no natural zero, so progress is measured
//!   from a virtual start 20% worse than the target
//!
//! The engine never owns result history; callers pass the current best (or
//! the raw values to pick it from) on every call.

use serde::{Deserialize, Serialize};

use crate::catalog::get_discipline;
use crate::models::{Direction, DisciplineId};

/// Virtual start for smaller-is-better goals, as a multiple of the target.
/// Output compatibility depends on this exact value.
pub const VIRTUAL_START_FACTOR: f64 = 1.2;

// ---------------------------------------------------------------------------
/// Progress result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// 0..=100
    pub percent: f64,
    /// Distance still to cover; `None` until there is a result
    pub remaining: Option<f64>,
}

impl GoalProgress {
    pub const NOT_STARTED: GoalProgress = GoalProgress {
        percent: 0.0,
        remaining: None,
    };

    pub const REACHED: GoalProgress = GoalProgress {
        percent: 100.0,
        remaining: Some(0.0),
    };

    pub fn is_achieved(&self) -> bool {
        *self == Self::REACHED
    }
}

fn clamp_percent(raw: f64) -> f64 {
    // NaN maps to 0 rather than propagating to the progress bar
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, 100.0)
    }
}

// ---------------------------------------------------------------------------
/// Branches
// ---------------------------------------------------------------------------

fn is_reached(target: f64, direction: Direction, current_best: f64) -> bool {
    direction.at_least_as_good(current_best, target)
}

/// Smaller-is-better progress measured from the virtual start
fn progress_from_virtual_start(target: f64, current_best: f64) -> GoalProgress {
    let virtual_start = target * VIRTUAL_START_FACTOR;
    if virtual_start == target {
        // Zero target: no span to measure against
        return GoalProgress {
            percent: 0.0,
            remaining: Some(current_best - target),
        };
    }

    let percent = (virtual_start - current_best) / (virtual_start - target) * 100.0;
    GoalProgress {
        percent: clamp_percent(percent),
        remaining: Some((current_best - target).max(0.0)),
    }
}

/// Larger-is-better progress measured from zero
fn progress_from_zero(target: f64, current_best: f64) -> GoalProgress {
    if target == 0.0 {
        // Any non-negative result clears a zero target
        if current_best >= 0.0 {
            return GoalProgress::REACHED;
        }
        return GoalProgress {
            percent: 0.0,
            remaining: Some(target - current_best),
        };
    }

    GoalProgress {
        percent: clamp_percent(current_best / target * 100.0),
        remaining: Some((target - current_best).max(0.0)),
    }
}

/// Progress toward `target` given the athlete's current best, if any. A NaN
/// best counts as no result.
pub fn progress(target: f64, direction: Direction, current_best: Option<f64>) -> GoalProgress {
    let Some(best) = current_best.filter(|v| !v.is_nan()) else {
        return GoalProgress::NOT_STARTED;
    };

    if is_reached(target, direction, best) {
        return GoalProgress::REACHED;
    }

    match direction {
        Direction::LowerIsBetter => progress_from_virtual_start(target, best),
        Direction::HigherIsBetter => progress_from_zero(target, best),
    }
}

/// Best value in a result history, ignoring NaN entries
pub fn current_best(values: &[f64], direction: Direction) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .reduce(|best, v| if direction.is_better(v, best) { v } else { best })
}

// ---------------------------------------------------------------------------
/// Goals
// ---------------------------------------------------------------------------

/// A personal target in one discipline. Direction always comes from the
/// catalog so it cannot drift from the discipline definition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub discipline_id: DisciplineId,
    pub target_value: f64,
}

impl Goal {
    pub fn new(discipline_id: DisciplineId, target_value: f64) -> Self {
        Self {
            discipline_id,
            target_value,
        }
    }

    /// `None` when the discipline is unknown
    pub fn direction(&self) -> Option<Direction> {
        get_discipline(self.discipline_id).map(|d| d.direction)
    }

    pub fn progress(&self, current_best: Option<f64>) -> Option<GoalProgress> {
        let direction = self.direction()?;
        Some(progress(self.target_value, direction, current_best))
    }

    /// Progress using the best of `values`
    pub fn progress_from_results(&self, values: &[f64]) -> Option<GoalProgress> {
        let direction = self.direction()?;
        Some(progress(
            self.target_value,
            direction,
            current_best(values, direction),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_close;
    use proptest::prelude::*;

    #[test]
    fn test_no_result_yet() {
        let p = progress(12.00, Direction::LowerIsBetter, None);
        assert_eq!(p.percent, 0.0);
        assert_eq!(p.remaining, None);
    }

    #[test]
    fn test_lower_is_better_halfway() {
        // Virtual start 14.40, so 13.20 is half way
        let p = progress(12.00, Direction::LowerIsBetter, Some(13.20));
        assert_close(p.percent, 50.0, 1e-9);
        assert_close(p.remaining.unwrap(), 1.20, 1e-9);
    }

    #[test]
    fn test_lower_is_better_slower_than_virtual_start() {
        let p = progress(12.00, Direction::LowerIsBetter, Some(15.00));
        assert_eq!(p.percent, 0.0);
        assert_close(p.remaining.unwrap(), 3.0, 1e-9);
    }

    #[test]
    fn test_higher_is_better_fraction() {
        let p = progress(5.00, Direction::HigherIsBetter, Some(4.00));
        assert_close(p.percent, 80.0, 1e-9);
        assert_close(p.remaining.unwrap(), 1.00, 1e-9);
    }

    #[test]
    fn test_reaching_target_exactly() {
        for direction in [Direction::LowerIsBetter, Direction::HigherIsBetter] {
            let p = progress(12.34, direction, Some(12.34));
            assert_eq!(p, GoalProgress::REACHED);
            assert!(p.is_achieved());
        }
    }

    #[test]
    fn test_beating_target() {
        assert!(progress(12.0, Direction::LowerIsBetter, Some(11.5)).is_achieved());
        assert!(progress(5.0, Direction::HigherIsBetter, Some(5.5)).is_achieved());
    }

    #[test]
    fn test_zero_target_lower_is_better() {
        let p = progress(0.0, Direction::LowerIsBetter, Some(3.0));
        assert_eq!(p.percent, 0.0);
        assert_eq!(p.remaining, Some(3.0));
    }

    #[test]
    fn test_zero_target_higher_is_better() {
        assert!(progress(0.0, Direction::HigherIsBetter, Some(0.0)).is_achieved());
        assert!(progress(0.0, Direction::HigherIsBetter, Some(2.0)).is_achieved());
        let below = progress(0.0, Direction::HigherIsBetter, Some(-1.0));
        assert_eq!(below.percent, 0.0);
        assert_eq!(below.remaining, Some(1.0));
    }

    #[test]
    fn test_nan_best_is_not_started() {
        for direction in [Direction::LowerIsBetter, Direction::HigherIsBetter] {
            assert_eq!(progress(12.0, direction, Some(f64::NAN)), GoalProgress::NOT_STARTED);
            assert_eq!(progress(0.0, direction, Some(f64::NAN)), GoalProgress::NOT_STARTED);
        }
    }

    #[test]
    fn test_negative_result_clamps_to_zero() {
        let p = progress(5.0, Direction::HigherIsBetter, Some(-2.0));
        assert_eq!(p.percent, 0.0);
    }

    #[test]
    fn test_current_best() {
        let values = [13.4, 12.9, f64::NAN, 13.1];
        assert_eq!(current_best(&values, Direction::LowerIsBetter), Some(12.9));
        assert_eq!(current_best(&values, Direction::HigherIsBetter), Some(13.4));
        assert_eq!(current_best(&[], Direction::HigherIsBetter), None);
        assert_eq!(current_best(&[f64::NAN], Direction::LowerIsBetter), None);
    }

    #[test]
    fn test_goal_direction_comes_from_catalog() {
        let sprint = Goal::new(3, 12.00);
        assert_eq!(sprint.direction(), Some(Direction::LowerIsBetter));
        let p = sprint.progress(Some(13.20)).unwrap();
        assert_close(p.percent, 50.0, 1e-9);

        let long_jump = Goal::new(22, 5.00);
        let p = long_jump.progress_from_results(&[3.90, 4.00, 3.75]).unwrap();
        assert_close(p.percent, 80.0, 1e-9);

        assert_eq!(Goal::new(999, 1.0).progress(Some(1.0)), None);
    }

    #[test]
    fn test_goal_without_results() {
        let goal = Goal::new(22, 5.00);
        assert_eq!(goal.progress_from_results(&[]), Some(GoalProgress::NOT_STARTED));
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::LowerIsBetter), Just(Direction::HigherIsBetter)]
    }

    proptest! {
        #[test]
        fn prop_percent_is_clamped(
            target in -100.0f64..1000.0,
            best in -100.0f64..2000.0,
            direction in direction_strategy(),
        ) {
            let p = progress(target, direction, Some(best));
            prop_assert!((0.0..=100.0).contains(&p.percent));
        }

        #[test]
        fn prop_improvement_never_lowers_percent(
            target in 0.1f64..1000.0,
            a in 0.0f64..2000.0,
            b in 0.0f64..2000.0,
            direction in direction_strategy(),
        ) {
            let (better, worse) = if direction.at_least_as_good(a, b) { (a, b) } else { (b, a) };
            let better_p = progress(target, direction, Some(better));
            let worse_p = progress(target, direction, Some(worse));
            prop_assert!(better_p.percent >= worse_p.percent);
        }

        #[test]
        fn prop_exact_target_is_reached(
            target in -1000.0f64..1000.0,
            direction in direction_strategy(),
        ) {
            prop_assert!(progress(target, direction, Some(target)).is_achieved());
        }
    }
}
