use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
  /// Tytöt / naiset
  Girl,
  /// Pojat / miehet
  Boy,
}

/// ---------------------------------------------------------------------------
/// General age categories, youngest to oldest
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeCategory {
  Age3,
  Age4,
  Age5,
  Age6,
  Age7,
  Age8,
  Age9,
  Age10,
  Age11,
  Age12,
  Age13,
  Age14,
  Age15,
  Age17,
  Age19,
  Age22,
  Adult,
}

impl AgeCategory {
  pub const ALL: [AgeCategory; 17] = [
    AgeCategory::Age3,
    AgeCategory::Age4,
    AgeCategory::Age5,
    AgeCategory::Age6,
    AgeCategory::Age7,
    AgeCategory::Age8,
    AgeCategory::Age9,
    AgeCategory::Age10,
    AgeCategory::Age11,
    AgeCategory::Age12,
    AgeCategory::Age13,
    AgeCategory::Age14,
    AgeCategory::Age15,
    AgeCategory::Age17,
    AgeCategory::Age19,
    AgeCategory::Age22,
    AgeCategory::Adult,
  ];

  /// Gender-neutral code
  pub fn code(&self) -> &'static str {
    match self {
      AgeCategory::Age3 => "3",
      AgeCategory::Age4 => "4",
      AgeCategory::Age5 => "5",
      AgeCategory::Age6 => "6",
      AgeCategory::Age7 => "7",
      AgeCategory::Age8 => "8",
      AgeCategory::Age9 => "9",
      AgeCategory::Age10 => "10",
      AgeCategory::Age11 => "11",
      AgeCategory::Age12 => "12",
      AgeCategory::Age13 => "13",
      AgeCategory::Age14 => "14",
      AgeCategory::Age15 => "15",
      AgeCategory::Age17 => "17",
      AgeCategory::Age19 => "19",
      AgeCategory::Age22 => "22",
      AgeCategory::Adult => "A",
    }
  }

  /// Federation label: T/P for girls and boys up to 15, N/M above that
  pub fn code_for(&self, gender: Gender) -> String {
    let youth = *self <= AgeCategory::Age15;
    let prefix = match (gender, youth) {
      (Gender::Girl, true) => "T",
      (Gender::Boy, true) => "P",
      (Gender::Girl, false) => "N",
      (Gender::Boy, false) => "M",
    };
    match self {
      AgeCategory::Adult => prefix.to_string(),
      other => format!("{}{}", prefix, other.code()),
    }
  }
}

impl std::fmt::Display for AgeCategory {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.code())
  }
}

impl std::str::FromStr for AgeCategory {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    AgeCategory::ALL
      .iter()
      .copied()
      .find(|c| c.code() == s)
      .ok_or_else(|| format!("Unknown age category: {}", s))
  }
}

/// ---------------------------------------------------------------------------
/// Skill-badge age bands (a separate, narrower table)
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillAgeCategory {
  T8,
  T9,
  T11,
  T13,
  T15,
}

impl SkillAgeCategory {
  pub const ALL: [SkillAgeCategory; 5] = [
    SkillAgeCategory::T8,
    SkillAgeCategory::T9,
    SkillAgeCategory::T11,
    SkillAgeCategory::T13,
    SkillAgeCategory::T15,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      SkillAgeCategory::T8 => "T8",
      SkillAgeCategory::T9 => "T9",
      SkillAgeCategory::T11 => "T11",
      SkillAgeCategory::T13 => "T13",
      SkillAgeCategory::T15 => "T15",
    }
  }
}

impl std::fmt::Display for SkillAgeCategory {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
