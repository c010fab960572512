use bloom_engine::scoring::{
    compare, BloomStatus, Category, ProfileId, PropertyMetrics, PropertyScorer, ScoreHistoryEntry,
    Trend,
};
use bloom_engine::workflows::{rank_deals, DealCandidate, HuntCriteria};
use chrono::{Duration, TimeZone, Utc};

fn candidate(id: &str, metrics: PropertyMetrics) -> DealCandidate {
    DealCandidate {
        id: id.to_string(),
        name: format!("Listing {id}"),
        address: Some("100 Main St".to_string()),
        units: Some(150),
        price: Some(12_500_000.0),
        metrics,
    }
}

fn strong_metrics() -> PropertyMetrics {
    PropertyMetrics::new()
        .with_value("noi-yield", 9.0)
        .with_value("cash-on-cash", 9.0)
        .with_value("occupancy-rate", 96.0)
        .with_value("dscr", 1.8)
        .with_value("ltv", 55.0)
        .with_value("walk-transit-score", 90.0)
        .with_value("title-survey", true)
        .with_value("environmental", true)
        .with_value("zoning-permits", true)
        .with_value("insurance-coverage", true)
}

#[test]
fn ranking_filters_below_floor_and_sorts_descending() {
    let scorer = PropertyScorer::standard();
    let profile = scorer.registry().get(ProfileId::Equal);
    let candidates = vec![
        candidate("average", PropertyMetrics::new()),
        candidate("strong", strong_metrics()),
        candidate("weak", PropertyMetrics::new().with_value("noi-yield", 1.0)),
        candidate("average-twin", PropertyMetrics::new()),
    ];

    let report = rank_deals(&scorer, &candidates, profile, &HuntCriteria::with_min_total(40.0));

    let ids: Vec<_> = report.deals.iter().map(|deal| deal.id.as_str()).collect();
    assert_eq!(ids, vec!["strong", "average", "average-twin"]);
    assert_eq!(report.scanned, 4);
    assert!(report
        .deals
        .windows(2)
        .all(|pair| pair[0].total_score() >= pair[1].total_score()));
}

#[test]
fn default_floor_keeps_only_blooming_deals() {
    let scorer = PropertyScorer::standard();
    let profile = scorer.registry().get(ProfileId::IncomeFocus);
    let report = rank_deals(
        &scorer,
        &[candidate("strong", strong_metrics()), candidate("average", PropertyMetrics::new())],
        profile,
        &HuntCriteria::default(),
    );

    assert!(report
        .deals
        .iter()
        .all(|deal| deal.total_score() >= 50.0 && deal.status() != BloomStatus::Budding));
    assert!(report.deals.iter().all(|deal| deal.id != "average"));
}

#[test]
fn unit_and_price_limits_apply_before_scoring() {
    let scorer = PropertyScorer::standard();
    let profile = scorer.registry().get(ProfileId::Equal);
    let criteria = HuntCriteria {
        min_total: 0.0,
        min_units: Some(200),
        max_price: None,
    };

    let report = rank_deals(&scorer, &[candidate("small", strong_metrics())], profile, &criteria);
    assert_eq!(report.scanned, 1);
    assert!(report.deals.is_empty());
}

#[test]
fn rescoring_after_improvements_reports_deltas() {
    let scorer = PropertyScorer::standard();
    let profile = scorer.registry().get(ProfileId::Equal);
    let start = Utc
        .with_ymd_and_hms(2025, 7, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp");

    let before = scorer.score(&PropertyMetrics::new(), profile);
    let after = scorer.score(
        &strong_metrics().with_trend(Category::Cashflow, Trend::Up),
        profile,
    );

    let comparison = compare(
        &ScoreHistoryEntry::from_scorecard(start, &before),
        &ScoreHistoryEntry::from_scorecard(start + Duration::days(90), &after),
    );

    assert!(comparison.total_delta > 0.0);
    assert!(comparison.category_deltas[&Category::Cashflow] > 0.0);
    assert_eq!(comparison.category_deltas[&Category::Liquidity], 0.0);
    assert_eq!(comparison.previous_status, BloomStatus::LateBloom);
    assert_eq!(comparison.category_deltas.len(), 8);
}
