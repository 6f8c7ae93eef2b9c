use serde::{Deserialize, Serialize};

use crate::reference::GrowthStandard;

/// Complete engine configuration
///
/// Every implicit default of the assessment formulas lives here rather
/// than inside the formulas themselves: the kcal/kg fallback, the activity
/// fallback, the pediatric age cutoff and the growth-standard policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Fallback kcal/kg factor used when the snapshot leaves its custom
    /// factor unset (default: 30.0)
    pub custom_energy_factor: f64,

    /// Fallback activity multiplier used when the snapshot leaves its
    /// activity factor unset (default: 1.2)
    pub activity_factor: f64,

    /// Age in years below which the pediatric pathway applies
    ///
    /// Clinical sources disagree between 19 and 20; it is configurable
    /// rather than fixed (default: 19).
    pub pediatric_age_cutoff: u32,

    /// Growth standard to evaluate against; `None` selects by age
    /// (WHO under 24 months, CDC from 24 months)
    pub growth_standard: Option<GrowthStandard>,

    /// Maximum distance, on a curve's own axis (months or cm), between the
    /// patient's position and the nearest anchor before the curve is
    /// treated as out of range (default: 5.0)
    pub max_anchor_distance: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            custom_energy_factor: 30.0,
            activity_factor: 1.2,
            pediatric_age_cutoff: 19,
            growth_standard: None,
            max_anchor_distance: 5.0,
        }
    }
}

impl EngineOptions {
    /// Set the fallback kcal/kg factor
    pub fn with_custom_energy_factor(mut self, factor: f64) -> Self {
        self.custom_energy_factor = factor;
        self
    }

    /// Set the fallback activity multiplier
    pub fn with_activity_factor(mut self, factor: f64) -> Self {
        self.activity_factor = factor;
        self
    }

    /// Set the pediatric age cutoff in years
    pub fn with_pediatric_age_cutoff(mut self, years: u32) -> Self {
        self.pediatric_age_cutoff = years;
        self
    }

    /// Force a single growth standard for all ages
    pub fn with_growth_standard(mut self, standard: GrowthStandard) -> Self {
        self.growth_standard = Some(standard);
        self
    }

    /// Set the out-of-range anchor distance
    pub fn with_max_anchor_distance(mut self, distance: f64) -> Self {
        self.max_anchor_distance = distance;
        self
    }

    /// The standard to assess a patient of `age_months` against
    pub fn standard_for_age(&self, age_months: f64) -> GrowthStandard {
        match self.growth_standard {
            Some(standard) => standard,
            None if age_months < 24.0 => GrowthStandard::Who,
            None => GrowthStandard::Cdc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let opts = EngineOptions::default();
        assert_eq!(opts.custom_energy_factor, 30.0);
        assert_eq!(opts.activity_factor, 1.2);
        assert_eq!(opts.pediatric_age_cutoff, 19);
        assert!(opts.growth_standard.is_none());
        assert_eq!(opts.max_anchor_distance, 5.0);
    }

    #[test]
    fn test_options_builder() {
        let opts = EngineOptions::default()
            .with_custom_energy_factor(25.0)
            .with_activity_factor(1.55)
            .with_pediatric_age_cutoff(20)
            .with_growth_standard(GrowthStandard::Who)
            .with_max_anchor_distance(3.0);

        assert_eq!(opts.custom_energy_factor, 25.0);
        assert_eq!(opts.activity_factor, 1.55);
        assert_eq!(opts.pediatric_age_cutoff, 20);
        assert_eq!(opts.growth_standard, Some(GrowthStandard::Who));
        assert_eq!(opts.max_anchor_distance, 3.0);
    }

    #[test]
    fn test_standard_by_age_policy() {
        let opts = EngineOptions::default();
        assert_eq!(opts.standard_for_age(18.0), GrowthStandard::Who);
        assert_eq!(opts.standard_for_age(24.0), GrowthStandard::Cdc);
        assert_eq!(opts.standard_for_age(96.0), GrowthStandard::Cdc);

        let forced = EngineOptions::default().with_growth_standard(GrowthStandard::Who);
        assert_eq!(forced.standard_for_age(96.0), GrowthStandard::Who);
    }
}
