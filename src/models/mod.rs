pub mod age;
pub mod discipline;
pub mod skill;

pub use age::{AgeCategory, Gender, SkillAgeCategory};
pub use discipline::{
  Direction, Discipline, DisciplineCategory, DisciplineId, Implement, MeasurementUnit,
};
pub use skill::{RuleVersion, SkillKey, SkillLimit, SkillTier};
