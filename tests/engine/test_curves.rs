//! Reference-curve loading and provider behavior over the public API

use nutrisol::prelude::*;
use nutrisol::reference::{read_curves_from_reader, CurveError, PercentileRank};

const SAMPLE: &str = "\
metric,standard,gender,key,p3,p5,p10,p15,p25,p50,p75,p85,p90,p95,p97
weight,who,female,12,7.0,7.3,7.7,,8.4,9.2,10.1,,11.1,11.7,12.0
weight,who,female,18,7.9,8.2,8.7,,9.4,10.2,11.2,,12.3,12.9,13.3
";

#[test]
fn test_provider_lookup() {
    let provider = read_curves_from_reader(SAMPLE.as_bytes()).unwrap();

    let curve = provider
        .curve(GrowthMetric::Weight, GrowthStandard::Who, Gender::Female)
        .unwrap();
    assert_eq!(curve.anchors().len(), 2);
    assert_eq!(curve.domain(), Some((12.0, 18.0)));

    // Nearest anchor, with distance on the age axis
    let (anchor, distance) = curve.nearest_anchor(13.0).unwrap();
    assert_eq!(anchor.key(), 12.0);
    assert_eq!(distance, 1.0);

    assert!(provider
        .curve(GrowthMetric::Weight, GrowthStandard::Cdc, Gender::Female)
        .is_none());
}

#[test]
fn test_sparse_percentile_columns() {
    let provider = read_curves_from_reader(SAMPLE.as_bytes()).unwrap();
    let curve = provider
        .curve(GrowthMetric::Weight, GrowthStandard::Who, Gender::Female)
        .unwrap();
    let anchor = &curve.anchors()[0];

    assert!(anchor.value_at(PercentileRank::P15).is_none());
    assert_eq!(anchor.value_at(PercentileRank::P97), Some(12.0));
}

#[test]
fn test_comment_lines_skipped() {
    let commented = format!("# WHO girls 2006 dataset\n{}", SAMPLE);
    let provider = read_curves_from_reader(commented.as_bytes()).unwrap();
    assert_eq!(provider.len(), 1);
}

#[test]
fn test_metric_aliases() {
    let csv = "\
metric,standard,gender,key,p3,p5,p10,p15,p25,p50,p75,p85,p90,p95,p97
length,who,male,6,,,,,,67.6,,,,,
stature,cdc,male,96,,,,,,128.0,,,,,
";
    let provider = read_curves_from_reader(csv.as_bytes()).unwrap();
    assert!(provider
        .curve(GrowthMetric::Height, GrowthStandard::Who, Gender::Male)
        .is_some());
    assert!(provider
        .curve(GrowthMetric::Height, GrowthStandard::Cdc, Gender::Male)
        .is_some());
}

#[test]
fn test_validation_errors_surface() {
    let bad = "\
metric,standard,gender,key,p3,p5,p10,p15,p25,p50,p75,p85,p90,p95,p97
weight,who,female,12,9.0,,,,,8.0,,,,,
";
    let err = read_curves_from_reader(bad.as_bytes()).unwrap_err();
    assert!(matches!(err, CurveError::NonMonotonicAnchor { .. }));

    // And convert into the crate error type
    let crate_err: nutrisol::NutrisolError = err.into();
    assert!(crate_err.to_string().contains("Reference curve error"));
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(read_curves("/nonexistent/curves.csv").is_err());
}
