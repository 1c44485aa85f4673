//! Rules engine for a youth athletics result tracker.
//!
//! Stateless and synchronous: every call is a pure function of its inputs
//! plus static reference tables loaded once per process.

pub mod age;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod eligibility;
pub mod goals;
pub mod models;
pub mod records;
pub mod skill_limits;
pub mod skill_mark;
pub mod validation;

#[cfg(test)]
mod test_utils;

pub use age::{classify, classify_for_skill_badge};
pub use catalog::{get_discipline, DisciplineCatalog};
pub use commands::RulesState;
pub use config::{ConfigError, RulesConfig};
pub use eligibility::{disciplines_for_category, is_eligible, EligibilityRegistry};
pub use goals::{progress, Goal, GoalProgress};
pub use models::{
  AgeCategory, Direction, Discipline, DisciplineCategory, DisciplineId, Gender, Implement,
  MeasurementUnit, RuleVersion, SkillAgeCategory, SkillKey, SkillLimit, SkillTier,
};
pub use skill_mark::{SkillMarkEvaluator, VersionSelection};
pub use validation::{validate_all, DataDefect, InvalidReferenceData};
