use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use thiserror::Error;

use crate::data::Gender;
use crate::reference::{
    Anchor, GrowthMetric, GrowthStandard, InMemoryProvider, PercentileRank, ReferenceCurve,
};

/// Custom error type for the module
#[derive(Error, Debug)]
pub enum CurveError {
    #[error("CSV error: {0}")]
    ReadError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),
    #[error("Unknown growth standard: {0}")]
    UnknownStandard(String),
    #[error("Unknown gender: {0}")]
    UnknownGender(String),
    #[error("Curve {metric}/{standard}/{gender} has no anchors")]
    EmptyCurve {
        metric: GrowthMetric,
        standard: GrowthStandard,
        gender: Gender,
    },
    #[error("Percentile values not monotonic at anchor {key} of {metric}/{standard}/{gender}")]
    NonMonotonicAnchor {
        metric: GrowthMetric,
        standard: GrowthStandard,
        gender: Gender,
        key: f64,
    },
}

/// One row of a reference-curve datafile
///
/// Columns: `metric`, `standard`, `gender`, `key` (age in months, or
/// length in cm for length-keyed curves), then one column per percentile
/// rank (`p3` … `p97`). Percentile columns the dataset does not define may
/// be left empty.
#[derive(Debug, Clone, Deserialize)]
struct Row {
    metric: String,
    standard: String,
    gender: String,
    key: f64,
    p3: Option<f64>,
    p5: Option<f64>,
    p10: Option<f64>,
    p15: Option<f64>,
    p25: Option<f64>,
    p50: Option<f64>,
    p75: Option<f64>,
    p85: Option<f64>,
    p90: Option<f64>,
    p95: Option<f64>,
    p97: Option<f64>,
}

impl Row {
    fn identity(&self) -> Result<(GrowthMetric, GrowthStandard, Gender), CurveError> {
        let metric = self
            .metric
            .parse::<GrowthMetric>()
            .map_err(CurveError::UnknownMetric)?;
        let standard = self
            .standard
            .parse::<GrowthStandard>()
            .map_err(CurveError::UnknownStandard)?;
        let gender = self
            .gender
            .parse::<Gender>()
            .map_err(CurveError::UnknownGender)?;
        Ok((metric, standard, gender))
    }

    fn anchor(&self) -> Anchor {
        let pairs = [
            (PercentileRank::P3, self.p3),
            (PercentileRank::P5, self.p5),
            (PercentileRank::P10, self.p10),
            (PercentileRank::P15, self.p15),
            (PercentileRank::P25, self.p25),
            (PercentileRank::P50, self.p50),
            (PercentileRank::P75, self.p75),
            (PercentileRank::P85, self.p85),
            (PercentileRank::P90, self.p90),
            (PercentileRank::P95, self.p95),
            (PercentileRank::P97, self.p97),
        ];
        let points = pairs
            .iter()
            .filter_map(|(rank, value)| value.map(|v| (*rank, v)))
            .collect();
        Anchor::new(self.key, points)
    }
}

/// Read a reference-curve datafile and build a validated [`InMemoryProvider`]
///
/// For the expected columns, see the [Row] struct.
pub fn read_curves(path: impl Into<String>) -> Result<InMemoryProvider, CurveError> {
    let path = path.into();

    let reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(true)
        .from_path(path)?;

    build_provider(reader)
}

/// Read reference curves from any [`Read`] source (same format as
/// [`read_curves`])
pub fn read_curves_from_reader<R: Read>(source: R) -> Result<InMemoryProvider, CurveError> {
    let reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(true)
        .from_reader(source);

    build_provider(reader)
}

fn build_provider<R: Read>(mut reader: csv::Reader<R>) -> Result<InMemoryProvider, CurveError> {
    // Convert headers to lowercase
    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    reader.set_headers(csv::StringRecord::from(headers));

    // Group anchors by curve identity
    let mut anchors_map: HashMap<(GrowthMetric, GrowthStandard, Gender), Vec<Anchor>> =
        HashMap::new();
    for row_result in reader.deserialize() {
        let row: Row = row_result?;
        let identity = row.identity()?;
        anchors_map.entry(identity).or_default().push(row.anchor());
    }

    let mut provider = InMemoryProvider::new();
    for ((metric, standard, gender), anchors) in anchors_map {
        let curve = ReferenceCurve::new(metric, standard, gender, anchors);
        curve.validate()?;
        provider.insert(curve);
    }

    Ok(provider)
}
