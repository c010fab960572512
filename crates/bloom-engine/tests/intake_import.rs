use bloom_engine::scoring::{
    BloomStatus, Catalog, Category, ProfileId, PropertyScorer, RawValue, ScoreHistoryEntry,
};
use bloom_engine::workflows::{IntakeError, MetricsImporter};
use chrono::{TimeZone, Utc};

#[test]
fn fixture_imports_and_scores_end_to_end() {
    let data = include_bytes!("fixtures/sample_property.csv");
    let scorer = PropertyScorer::standard();

    let metrics =
        MetricsImporter::from_reader(&data[..], scorer.catalog()).expect("fixture imports");
    assert_eq!(metrics.values.len(), 21);
    assert!(!metrics.values.contains_key("supply-pipeline"));
    assert_eq!(metrics.values["zoning-permits"], RawValue::Boolean(true));
    assert_eq!(metrics.values["insurance-coverage"], RawValue::Boolean(false));
    assert!(metrics.unknown_ids(scorer.catalog()).is_empty());

    let scorecard = scorer.score_with_profile(&metrics, ProfileId::Equal);
    assert_eq!(scorecard.total_score, 44.8);
    assert_eq!(scorecard.status.status, BloomStatus::LateBloom);
    assert_eq!(
        scorecard.category(Category::Compliance).map(|entry| entry.score.score),
        Some(6.5)
    );

    let compliance = scorecard
        .category(Category::Compliance)
        .expect("compliance assessed");
    assert_eq!(compliance.score.completeness(), 0.8);

    let entry = ScoreHistoryEntry::from_scorecard(
        Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp"),
        &scorecard,
    );
    assert_eq!(entry.category_scores.len(), 8);
    assert_eq!(entry.recomputed_total(), entry.total_score);
}

#[test]
fn unknown_metric_names_are_rejected_with_their_line() {
    let csv = "metric,value\nnoi-yield,6.0\n\ncap-rate,5.5\n";
    let error = MetricsImporter::from_reader(csv.as_bytes(), &Catalog::standard())
        .expect_err("unknown metric rejected");

    match error {
        IntakeError::UnknownMetric { row, metric } => {
            assert_eq!(metric, "cap-rate");
            assert!(row >= 3);
        }
        other => panic!("expected unknown metric, got {other:?}"),
    }
}

#[test]
fn metric_ids_are_case_insensitive() {
    let csv = "metric,value\nDSCR,1.35\n  LTV  , 65 \n";
    let scorer = PropertyScorer::standard();
    let metrics = MetricsImporter::from_reader(csv.as_bytes(), scorer.catalog())
        .expect("import succeeds");

    assert_eq!(metrics.values["dscr"], RawValue::Numeric(1.35));
    assert_eq!(metrics.values["ltv"], RawValue::Numeric(65.0));

    let scorecard = scorer.score_with_profile(&metrics, ProfileId::Conservative);
    let financing = scorecard
        .category(Category::Financing)
        .expect("financing assessed");
    assert_eq!(financing.score.score, 5.0);
}

#[test]
fn boolean_metrics_reject_free_text() {
    let csv = "metric,value\nenvironmental,clean\n";
    let error = MetricsImporter::from_reader(csv.as_bytes(), &Catalog::standard())
        .expect_err("free text rejected");
    assert!(error.to_string().contains("environmental"));
}
