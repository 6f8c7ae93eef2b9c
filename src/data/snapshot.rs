use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Average month length in days, used to fold a day count into months
const DAYS_PER_MONTH: f64 = 30.4375;

/// Patient gender
///
/// Most anthropometric formulas branch on gender; it is a required field
/// of every [`PatientSnapshot`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(other.to_string()),
        }
    }
}

/// Pediatric age broken down into years, months and days
///
/// Growth reference curves are keyed by age in months; the breakdown allows
/// a finer position on the curve than whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PediatricAge {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl PediatricAge {
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Total age in (fractional) months
    pub fn total_months(&self) -> f64 {
        self.years as f64 * 12.0 + self.months as f64 + self.days as f64 / DAYS_PER_MONTH
    }
}

/// Direction of an energy goal adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalDirection {
    Loss,
    Gain,
}

/// A caloric adjustment toward a weight goal
///
/// Applied on top of total-expenditure estimates: subtracted for
/// [`GoalDirection::Loss`], added for [`GoalDirection::Gain`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyAdjustment {
    pub direction: GoalDirection,
    pub kcal: f64,
}

impl EnergyAdjustment {
    pub fn new(direction: GoalDirection, kcal: f64) -> Self {
        Self { direction, kcal }
    }

    /// The adjustment with its sign applied
    pub fn signed(&self) -> f64 {
        match self.direction {
            GoalDirection::Loss => -self.kcal,
            GoalDirection::Gain => self.kcal,
        }
    }
}

/// An amputated limb segment
///
/// Each segment accounts for a fixed fraction of total body weight; the sum
/// over all selected segments yields the amputation percentage reported in
/// the assessment. Push a segment twice to model bilateral loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimbSegment {
    Hand,
    Forearm,
    Arm,
    Foot,
    LowerLeg,
    Leg,
}

impl LimbSegment {
    /// Percentage of total body weight attributed to this segment
    pub fn body_weight_pct(&self) -> f64 {
        match self {
            LimbSegment::Hand => 0.7,
            LimbSegment::Forearm => 2.3,
            LimbSegment::Arm => 5.0,
            LimbSegment::Foot => 1.5,
            LimbSegment::LowerLeg => 5.9,
            LimbSegment::Leg => 16.0,
        }
    }
}

/// Immutable snapshot of patient inputs for one assessment
///
/// Unit conventions are fixed: heights and circumferences in cm, weights in
/// kg, skinfolds in mm, energy in kcal. A value of `0.0` means "not
/// provided"; a quantity that is zero or negative excludes every formula
/// that requires it, it never raises an error.
///
/// Build with [`PatientSnapshot::builder`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientSnapshot {
    pub gender: Gender,
    /// Age in whole years
    pub age_years: u32,
    /// Optional years/months/days breakdown for pediatric patients
    pub pediatric_age: Option<PediatricAge>,
    pub height_cm: f64,
    pub current_weight_kg: f64,
    /// User-selected working weight; overrides the corrected weight when > 0
    pub selected_weight_kg: f64,
    pub usual_weight_kg: f64,
    pub waist_cm: f64,
    pub hip_cm: f64,
    /// Mid-arm circumference
    pub mac_cm: f64,
    pub triceps_skinfold_mm: f64,
    pub head_circumference_cm: f64,
    /// Activity multiplier; 0 = unset (engine default applies)
    pub activity_factor: f64,
    /// Estimated ascites fluid mass (kg)
    pub ascites_kg: f64,
    /// Estimated edema fluid mass (kg)
    pub edema_kg: f64,
    /// Single fractional correction for fluid retention; when > 0 it
    /// supersedes the ascites/edema subtraction path
    pub edema_fraction: f64,
    pub amputations: Vec<LimbSegment>,
    pub body_fat_pct: f64,
    pub desired_body_fat_pct: f64,
    pub energy_adjustment: Option<EnergyAdjustment>,
    /// Custom kcal/kg factor; 0 = unset (engine default applies)
    pub custom_energy_factor: f64,
}

impl PatientSnapshot {
    /// Create a fluent builder for a snapshot
    pub fn builder() -> super::builder::SnapshotBuilder {
        super::builder::SnapshotBuilder::new()
    }

    /// Age in (fractional) months, preferring the pediatric breakdown
    pub fn age_months(&self) -> f64 {
        match self.pediatric_age {
            Some(age) => age.total_months(),
            None => self.age_years as f64 * 12.0,
        }
    }

    /// Whether the patient falls under the pediatric pathway for a given
    /// age cutoff in years
    pub fn is_pediatric(&self, cutoff_years: u32) -> bool {
        self.age_months() < cutoff_years as f64 * 12.0
    }
}
