//! End-to-end pipeline tests over the public API

use approx::assert_relative_eq;
use nutrisol::engine::{BmiClass, EstimatorKind, GrowthClass, WeightProtocol};
use nutrisol::prelude::*;
use nutrisol::reference::read_curves_from_reader;

const CURVES: &str = "\
metric,standard,gender,key,p3,p5,p10,p15,p25,p50,p75,p85,p90,p95,p97
weight,cdc,female,96,19.0,20.0,21.5,22.5,24.0,26.0,29.0,32.0,34.0,37.0,40.0
height,cdc,female,96,115.0,117.0,119.5,121.0,123.5,127.0,129.5,132.0,134.0,136.0,138.0
bmi,cdc,female,96,13.2,13.5,14.0,14.3,14.9,15.7,17.0,18.3,19.2,20.6,22.0
weight,who,male,12,8.0,8.3,8.6,8.9,9.3,10.0,10.7,11.2,11.5,12.0,12.5
height,who,male,12,71.0,71.8,72.9,73.6,74.6,76.0,77.5,79.0,79.6,80.2,81.0
head,who,male,12,44.0,44.3,44.8,45.1,45.5,46.0,46.6,47.2,47.5,48.0,48.5
weight_for_length,who,male,76,8.2,8.4,8.8,9.0,9.4,10.0,10.6,11.1,11.4,11.7,12.0
";

fn provider() -> InMemoryProvider {
    read_curves_from_reader(CURVES.as_bytes()).unwrap()
}

#[test]
fn test_adult_assessment() {
    let snapshot = PatientSnapshot::builder()
        .gender(Gender::Male)
        .age(40)
        .height(175.0)
        .weight(90.0)
        .build();
    let result = compute(&snapshot, &provider(), &EngineOptions::default());

    let body = result.body_size.as_ref().unwrap();
    assert_relative_eq!(body.bmi, 29.387755102040817);
    assert_eq!(body.class, Some(BmiClass::Overweight));

    let proto = result.protocol.as_ref().unwrap();
    assert_relative_eq!(proto.ibw, 68.9);
    assert_eq!(proto.label, WeightProtocol::Adjusted);

    let mifflin = result.estimate(EstimatorKind::MifflinStJeor).unwrap();
    assert_relative_eq!(mifflin.base, 1773.75);
    assert!(mifflin.formula.contains("kcal"));
}

#[test]
fn test_pediatric_assessment() {
    let snapshot = PatientSnapshot::builder()
        .gender(Gender::Female)
        .pediatric_age(8, 0, 0)
        .height(120.0)
        .weight(25.0)
        .build();
    let result = compute(&snapshot, &provider(), &EngineOptions::default());

    assert!(result.protocol.is_none());
    let growth = result.growth.as_ref().unwrap();
    assert_eq!(growth.standard, GrowthStandard::Cdc);

    let weight = growth.finding(GrowthMetric::Weight).unwrap();
    assert_eq!(weight.class, GrowthClass::Normal);
    assert!(weight.percentile.unwrap() > 3.0);
    assert!(weight.percentile.unwrap() < 50.0);

    assert!(growth.ideal_weight.is_some());
    assert!(result.estimate(EstimatorKind::PediatricEer).is_some());
}

#[test]
fn test_infant_uses_who_standard() {
    let snapshot = PatientSnapshot::builder()
        .gender(Gender::Male)
        .pediatric_age(1, 0, 0)
        .height(76.0)
        .weight(10.0)
        .head_circumference(46.0)
        .build();
    let result = compute(&snapshot, &provider(), &EngineOptions::default());

    let growth = result.growth.as_ref().unwrap();
    assert_eq!(growth.standard, GrowthStandard::Who);
    assert_eq!(growth.findings.len(), 4);
    for finding in &growth.findings {
        assert_relative_eq!(finding.percentile.unwrap(), 50.0);
    }
}

#[test]
fn test_batch_matches_sequential() {
    let snapshots: Vec<PatientSnapshot> = (0..16)
        .map(|i| {
            PatientSnapshot::builder()
                .gender(if i % 2 == 0 { Gender::Male } else { Gender::Female })
                .age(30 + i)
                .height(160.0 + i as f64)
                .weight(60.0 + i as f64 * 2.0)
                .build()
        })
        .collect();

    let provider = provider();
    let options = EngineOptions::default();
    let batch = compute_many(&snapshots, &provider, &options);

    assert_eq!(batch.len(), snapshots.len());
    for (snapshot, result) in snapshots.iter().zip(&batch) {
        assert_eq!(&compute(snapshot, &provider, &options), result);
    }
}

#[test]
fn test_result_json_round_trip() {
    let snapshot = PatientSnapshot::builder()
        .gender(Gender::Female)
        .pediatric_age(8, 0, 0)
        .height(120.0)
        .weight(35.0)
        .build();
    let result = compute(&snapshot, &provider(), &EngineOptions::default());

    let json = serde_json::to_string_pretty(&result).unwrap();
    let back: AssessmentResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
