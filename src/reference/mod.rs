//! Growth reference data: curves, standards and the provider abstraction
//!
//! The engine never owns reference content. Consumers supply percentile
//! tables through a [`ReferenceProvider`]; the crate ships the data model
//! ([`ReferenceCurve`], [`Anchor`]), an in-memory provider, and CSV/JSON
//! loaders that validate the curve invariants on ingestion.

pub mod curve;
pub mod parse;

pub use curve::{Anchor, PercentileRank, ReferenceCurve};
pub use parse::{read_curves, read_curves_from_reader, CurveError};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::data::Gender;

/// The population growth standard a curve belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthStandard {
    Who,
    Cdc,
}

impl fmt::Display for GrowthStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthStandard::Who => write!(f, "WHO"),
            GrowthStandard::Cdc => write!(f, "CDC"),
        }
    }
}

impl FromStr for GrowthStandard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "who" => Ok(GrowthStandard::Who),
            "cdc" => Ok(GrowthStandard::Cdc),
            other => Err(other.to_string()),
        }
    }
}

/// The measurement a growth curve tracks
///
/// Age-keyed metrics position the patient by age in months;
/// [`GrowthMetric::WeightForLength`] is keyed by length/stature in cm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthMetric {
    Weight,
    Height,
    Bmi,
    HeadCircumference,
    WeightForLength,
}

impl GrowthMetric {
    /// Short stable name used in flattened exports and data files
    pub fn name(&self) -> &'static str {
        match self {
            GrowthMetric::Weight => "weight",
            GrowthMetric::Height => "height",
            GrowthMetric::Bmi => "bmi",
            GrowthMetric::HeadCircumference => "head",
            GrowthMetric::WeightForLength => "weight_for_length",
        }
    }
}

impl fmt::Display for GrowthMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GrowthMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight" => Ok(GrowthMetric::Weight),
            "height" | "length" | "stature" => Ok(GrowthMetric::Height),
            "bmi" => Ok(GrowthMetric::Bmi),
            "head" | "head_circumference" => Ok(GrowthMetric::HeadCircumference),
            "weight_for_length" | "weight_for_stature" => Ok(GrowthMetric::WeightForLength),
            other => Err(other.to_string()),
        }
    }
}

/// Identity of one reference curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveKey {
    pub metric: GrowthMetric,
    pub standard: GrowthStandard,
    pub gender: Gender,
}

/// Read-only source of growth reference curves
///
/// Implementations must be safe for concurrent read access; the engine
/// never mutates reference data.
pub trait ReferenceProvider {
    /// Look up the curve for a (metric, standard, gender) combination
    fn curve(
        &self,
        metric: GrowthMetric,
        standard: GrowthStandard,
        gender: Gender,
    ) -> Option<&ReferenceCurve>;
}

/// Reference provider backed by an in-memory curve map
///
/// Populate it directly with [`InMemoryProvider::insert`], or load a
/// dataset with [`read_curves`] (CSV) or [`InMemoryProvider::from_json`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryProvider {
    curves: HashMap<CurveKey, ReferenceCurve>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a curve, replacing any previous curve with the same identity
    pub fn insert(&mut self, curve: ReferenceCurve) {
        let key = CurveKey {
            metric: curve.metric,
            standard: curve.standard,
            gender: curve.gender,
        };
        self.curves.insert(key, curve);
    }

    /// Load and validate curves from a JSON array of [`ReferenceCurve`]
    pub fn from_json(json: &str) -> Result<Self, CurveError> {
        let curves: Vec<ReferenceCurve> = serde_json::from_str(json)?;
        let mut provider = Self::new();
        for curve in curves {
            curve.validate()?;
            provider.insert(curve);
        }
        Ok(provider)
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

impl ReferenceProvider for InMemoryProvider {
    fn curve(
        &self,
        metric: GrowthMetric,
        standard: GrowthStandard,
        gender: Gender,
    ) -> Option<&ReferenceCurve> {
        self.curves.get(&CurveKey {
            metric,
            standard,
            gender,
        })
    }
}
