use serde::{Deserialize, Serialize};

use crate::data::Gender;
use crate::reference::{GrowthMetric, GrowthStandard};

/// Standard percentile ranks carried by growth reference curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PercentileRank {
    P3,
    P5,
    P10,
    P15,
    P25,
    P50,
    P75,
    P85,
    P90,
    P95,
    P97,
}

impl PercentileRank {
    /// All ranks, in ascending order
    pub const ALL: [PercentileRank; 11] = [
        PercentileRank::P3,
        PercentileRank::P5,
        PercentileRank::P10,
        PercentileRank::P15,
        PercentileRank::P25,
        PercentileRank::P50,
        PercentileRank::P75,
        PercentileRank::P85,
        PercentileRank::P90,
        PercentileRank::P95,
        PercentileRank::P97,
    ];

    /// The numeric percentile (3.0 for P3, etc.)
    pub fn percentile(&self) -> f64 {
        match self {
            PercentileRank::P3 => 3.0,
            PercentileRank::P5 => 5.0,
            PercentileRank::P10 => 10.0,
            PercentileRank::P15 => 15.0,
            PercentileRank::P25 => 25.0,
            PercentileRank::P50 => 50.0,
            PercentileRank::P75 => 75.0,
            PercentileRank::P85 => 85.0,
            PercentileRank::P90 => 90.0,
            PercentileRank::P95 => 95.0,
            PercentileRank::P97 => 97.0,
        }
    }
}

/// One reference-curve data point at a specific age (or length)
///
/// An anchor holds the subset of percentile values the reference dataset
/// defines at that key. Values are stored sorted by rank; within one anchor
/// they must be monotonically non-decreasing in percentile rank (validated
/// by [`ReferenceCurve::validate`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    key: f64,
    points: Vec<(PercentileRank, f64)>,
}

impl Anchor {
    /// Create an anchor at `key` (age in months, or length in cm for
    /// length-keyed curves). Non-finite values are dropped; points are
    /// sorted by rank.
    pub fn new(key: f64, points: Vec<(PercentileRank, f64)>) -> Self {
        let mut points: Vec<(PercentileRank, f64)> =
            points.into_iter().filter(|(_, v)| v.is_finite()).collect();
        points.sort_by_key(|(rank, _)| *rank);
        Self { key, points }
    }

    /// Age in months, or length in cm, of this anchor
    pub fn key(&self) -> f64 {
        self.key
    }

    /// Defined (rank, value) pairs, ascending by rank
    pub fn points(&self) -> &[(PercentileRank, f64)] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value at an exactly defined rank, if present
    pub fn value_at(&self, rank: PercentileRank) -> Option<f64> {
        self.points
            .iter()
            .find(|(r, _)| *r == rank)
            .map(|(_, v)| *v)
    }
}

/// A growth reference curve: an ordered sequence of anchors for one
/// (metric, standard, gender) combination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceCurve {
    pub metric: GrowthMetric,
    pub standard: GrowthStandard,
    pub gender: Gender,
    anchors: Vec<Anchor>,
}

impl ReferenceCurve {
    /// Create a curve; anchors are sorted by key
    pub fn new(
        metric: GrowthMetric,
        standard: GrowthStandard,
        gender: Gender,
        mut anchors: Vec<Anchor>,
    ) -> Self {
        anchors.sort_by(|a, b| a.key.partial_cmp(&b.key).unwrap_or(std::cmp::Ordering::Equal));
        Self {
            metric,
            standard,
            gender,
            anchors,
        }
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// The (min, max) key range covered by the curve
    pub fn domain(&self) -> Option<(f64, f64)> {
        match (self.anchors.first(), self.anchors.last()) {
            (Some(first), Some(last)) => Some((first.key, last.key)),
            _ => None,
        }
    }

    /// The anchor closest to `key`, with its distance on the curve's axis
    pub fn nearest_anchor(&self, key: f64) -> Option<(&Anchor, f64)> {
        self.anchors
            .iter()
            .map(|a| (a, (a.key - key).abs()))
            .min_by(|(_, d1), (_, d2)| d1.partial_cmp(d2).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Check the curve invariants: at least one anchor, and within each
    /// anchor the values are non-decreasing in percentile rank
    pub fn validate(&self) -> Result<(), super::parse::CurveError> {
        if self.anchors.is_empty() {
            return Err(super::parse::CurveError::EmptyCurve {
                metric: self.metric,
                standard: self.standard,
                gender: self.gender,
            });
        }
        for anchor in &self.anchors {
            for pair in anchor.points.windows(2) {
                if pair[1].1 < pair[0].1 {
                    return Err(super::parse::CurveError::NonMonotonicAnchor {
                        metric: self.metric,
                        standard: self.standard,
                        gender: self.gender,
                        key: anchor.key,
                    });
                }
            }
        }
        Ok(())
    }
}
