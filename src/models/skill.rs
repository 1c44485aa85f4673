use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::discipline::Direction;

/// First day the current rule tables are in force (1.1.2026)
pub const CUTOVER: (i32, u32, u32) = (2026, 1, 1);

/// ---------------------------------------------------------------------------
/// Skill mark tiers (taitomerkit A, B, C)
/// ---------------------------------------------------------------------------

/// Ordered so that `Top > Mid > Entry`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillTier {
  #[serde(rename = "C")]
  Entry,
  #[serde(rename = "B")]
  Mid,
  #[serde(rename = "A")]
  Top,
}

/// Thresholds for one (rule version, age band, skill key) row, in the
/// discipline's canonical unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLimit {
  pub top: f64,
  pub mid: f64,
  pub entry: f64,
}

impl SkillLimit {
  pub const fn new(top: f64, mid: f64, entry: f64) -> Self {
    Self { top, mid, entry }
  }

  /// Best tier reached by `value`. A value equal to a threshold earns that tier.
  pub fn tier_for(&self, value: f64, direction: Direction) -> Option<SkillTier> {
    if direction.at_least_as_good(value, self.top) {
      Some(SkillTier::Top)
    } else if direction.at_least_as_good(value, self.mid) {
      Some(SkillTier::Mid)
    } else if direction.at_least_as_good(value, self.entry) {
      Some(SkillTier::Entry)
    } else {
      None
    }
  }

  /// Top is the most demanding threshold and entry the least
  pub fn is_monotonic(&self, direction: Direction) -> bool {
    let finite = self.top.is_finite() && self.mid.is_finite() && self.entry.is_finite();
    finite
      && direction.at_least_as_good(self.top, self.mid)
      && direction.at_least_as_good(self.mid, self.entry)
  }
}

/// ---------------------------------------------------------------------------
/// Rule versions
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleVersion {
  /// 2014 limits, in force through 31.12.2025
  Legacy,
  /// 2026 limits, in force from 1.1.2026
  Current,
}

impl RuleVersion {
  pub const ALL: [RuleVersion; 2] = [RuleVersion::Legacy, RuleVersion::Current];

  /// Version in force on `date`, before any fallback for unpublished tables
  pub fn for_date(date: NaiveDate) -> Self {
    if (date.year(), date.month(), date.day()) >= CUTOVER {
      RuleVersion::Current
    } else {
      RuleVersion::Legacy
    }
  }
}

impl std::fmt::Display for RuleVersion {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Legacy => write!(f, "legacy"),
      Self::Current => write!(f, "current"),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Skill keys: one row of the federation's published limit tables
/// ---------------------------------------------------------------------------

/// Distinct threshold rows. Throws carry the implement weight because a
/// lighter implement is a separate row, not a unit conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKey {
  Run40m,
  Run60m,
  Run100m,
  Run150m,
  Run200m,
  Run300m,
  Run800m,
  Run1000m,
  Run2000m,
  Steeplechase1500m,
  Hurdles60m,
  Hurdles80m,
  Hurdles200m,
  Hurdles300m,
  Walk600m,
  Walk800m,
  Walk1000m,
  Walk2000m,
  Walk3000m,
  HighJump,
  PoleVault,
  LongJump,
  TripleJump,
  Shot2kg,
  Shot3kg,
  Discus600g,
  Discus750g,
  Discus1kg,
  Hammer2500g,
  Hammer3kg,
  Javelin400g,
  Javelin500g,
  Triathlon,
  Tetrathlon,
  Pentathlon,
}

impl SkillKey {
  /// Key as written in the federation tables
  pub fn as_str(&self) -> &'static str {
    match self {
      SkillKey::Run40m => "40m",
      SkillKey::Run60m => "60m",
      SkillKey::Run100m => "100m",
      SkillKey::Run150m => "150m",
      SkillKey::Run200m => "200m",
      SkillKey::Run300m => "300m",
      SkillKey::Run800m => "800m",
      SkillKey::Run1000m => "1000m",
      SkillKey::Run2000m => "2000m",
      SkillKey::Steeplechase1500m => "1500m_ej",
      SkillKey::Hurdles60m => "60m_aj",
      SkillKey::Hurdles80m => "80m_aj",
      SkillKey::Hurdles200m => "200m_aj",
      SkillKey::Hurdles300m => "300m_aj",
      SkillKey::Walk600m => "600m_kavely",
      SkillKey::Walk800m => "800m_kavely",
      SkillKey::Walk1000m => "1000m_kavely",
      SkillKey::Walk2000m => "2000m_kavely",
      SkillKey::Walk3000m => "3000m_kavely",
      SkillKey::HighJump => "korkeus",
      SkillKey::PoleVault => "seivas",
      SkillKey::LongJump => "pituus",
      SkillKey::TripleJump => "3-loikka",
      SkillKey::Shot2kg => "kuula_2kg",
      SkillKey::Shot3kg => "kuula_3kg",
      SkillKey::Discus600g => "kiekko_600g",
      SkillKey::Discus750g => "kiekko_750g",
      SkillKey::Discus1kg => "kiekko_1kg",
      SkillKey::Hammer2500g => "moukari_2.5kg",
      SkillKey::Hammer3kg => "moukari_3kg",
      SkillKey::Javelin400g => "keihas_400g",
      SkillKey::Javelin500g => "keihas_500g",
      SkillKey::Triathlon => "3-ottelu",
      SkillKey::Tetrathlon => "4-ottelu",
      SkillKey::Pentathlon => "5-ottelu",
    }
  }

  /// Running and walking rows are timed; everything else is measured or scored
  pub fn direction(&self) -> Direction {
    match self {
      SkillKey::Run40m
      | SkillKey::Run60m
      | SkillKey::Run100m
      | SkillKey::Run150m
      | SkillKey::Run200m
      | SkillKey::Run300m
      | SkillKey::Run800m
      | SkillKey::Run1000m
      | SkillKey::Run2000m
      | SkillKey::Steeplechase1500m
      | SkillKey::Hurdles60m
      | SkillKey::Hurdles80m
      | SkillKey::Hurdles200m
      | SkillKey::Hurdles300m
      | SkillKey::Walk600m
      | SkillKey::Walk800m
      | SkillKey::Walk1000m
      | SkillKey::Walk2000m
      | SkillKey::Walk3000m => Direction::LowerIsBetter,
      _ => Direction::HigherIsBetter,
    }
  }
}
