use bloom_engine::config::{AppConfig, ScoringConfig};
use bloom_engine::error::AppError;
use bloom_engine::scoring::history::ScoreComparison;
use bloom_engine::scoring::scale::{interpret, score_8_to_10};
use bloom_engine::scoring::{
    compare, BloomStatus, Category, CategoryAssessment, CategoryValue, Dimension, ProfileId,
    PropertyMetrics, PropertyScorer, ScoreHistoryEntry, Scorecard, Trend,
};
use bloom_engine::workflows::{rank_deals, DealCandidate, HuntCriteria, MetricsImporter};
use chrono::{Duration, Utc};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// `metric,value` CSV with one row per sub-criterion
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Weighting profile id (defaults to APP_DEFAULT_PROFILE; unknown ids use equal weights)
    #[arg(long)]
    pub(crate) profile: Option<String>,
    /// Print the full scorecard as JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Weighting profile used for the sample property and the deal hunt
    #[arg(long)]
    pub(crate) profile: Option<String>,
    /// Minimum 0-64 total for the deal hunt (defaults to 40, the late-bloom tier)
    #[arg(long)]
    pub(crate) min_total: Option<f64>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { csv, profile, json } = args;
    let config = AppConfig::load()?;

    let scorer = PropertyScorer::standard();
    let metrics = MetricsImporter::from_path(&csv, scorer.catalog())?;
    let profile_id = requested_profile(profile.as_deref(), &config.scoring);
    let scorecard = scorer.score_with_profile(&metrics, profile_id);

    if json {
        let rendered = serde_json::to_string_pretty(&scorecard).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        println!("Scored {}", csv.display());
        render_scorecard(&scorecard);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { profile, min_total } = args;
    let config = AppConfig::load()?;
    let profile_id = requested_profile(profile.as_deref(), &config.scoring);

    let scorer = PropertyScorer::standard();
    let profile = scorer.registry().get(profile_id);

    println!("Bloom scoring demo");
    let sample = sample_property();
    let scorecard = scorer.score(&sample, profile);
    render_scorecard(&scorecard);

    let today = Utc::now();
    let previous = ScoreHistoryEntry::from_scorecard(
        today - Duration::days(90),
        &scorer.score(&sample_property_last_quarter(), profile),
    );
    let current = ScoreHistoryEntry::from_scorecard(today, &scorecard);
    render_comparison(&compare(&previous, &current));

    let criteria =
        HuntCriteria::with_min_total(min_total.unwrap_or(BloomStatus::LateBloom.min_total()));
    let report = rank_deals(&scorer, &sample_candidates(), profile, &criteria);
    println!(
        "\nDeal hunt: {} of {} listings at or above {:.1}/64",
        report.deals.len(),
        report.scanned,
        report.min_total
    );
    for deal in &report.deals {
        println!(
            "- {} {} ({}): {:.1}/64 {}",
            deal.scorecard.status.emoji,
            deal.name,
            deal.id,
            deal.total_score(),
            deal.scorecard.status.label
        );
    }

    Ok(())
}

/// An explicit `--profile` wins; otherwise the configured default applies.
fn requested_profile(requested: Option<&str>, scoring: &ScoringConfig) -> ProfileId {
    requested
        .map(ProfileId::parse_or_default)
        .unwrap_or(scoring.default_profile)
}

pub(crate) fn render_scorecard(scorecard: &Scorecard) {
    println!(
        "{} {} | total {:.1}/64 ({:.0}%) | grade {} | {} profile {:.1}/100 {} {}",
        scorecard.status.emoji,
        scorecard.status.label,
        scorecard.total_score,
        scorecard.normalized_score,
        scorecard.grade,
        scorecard.profile,
        scorecard.weighted_score,
        scorecard.rating.icon(),
        scorecard.rating.label()
    );
    println!(
        "Data completeness {:.0}% | mean confidence {:.0}%",
        scorecard.completeness * 100.0,
        scorecard.confidence * 100.0
    );

    println!("\nPetals");
    for assessment in &scorecard.categories {
        let category = assessment.category();
        println!(
            "- {} {:<12} {:>4.1}/8 ({:>4.1}/10) {:<13} {:<9} {:.0}% confidence",
            category.icon(),
            assessment.label,
            assessment.value(),
            score_8_to_10(assessment.value()),
            interpret(assessment.value()).label,
            assessment.trend.label(),
            assessment.confidence * 100.0
        );
    }

    let labels = |entries: Vec<&CategoryAssessment>| {
        entries
            .iter()
            .map(|entry| entry.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!(
        "Strongest: {} | weakest: {}",
        labels(scorecard.strongest(2)),
        labels(scorecard.weakest(2))
    );

    println!("\nDimensions");
    for dimension in Dimension::ordered() {
        println!(
            "- {:<13} {:.1}",
            dimension.label(),
            scorecard.dimensions.get(dimension)
        );
    }

    if scorecard.insights.is_empty() {
        println!("\nInsights: none");
    } else {
        println!("\nInsights");
        for insight in &scorecard.insights {
            println!("- [P{}] {}: {}", insight.priority, insight.title, insight.message);
        }
    }
}

fn render_comparison(comparison: &ScoreComparison) {
    println!(
        "\nSince {}: {:+.1} points ({} -> {})",
        comparison.previous_date.format("%Y-%m-%d"),
        comparison.total_delta,
        comparison.previous_status.label(),
        comparison.current_status.label()
    );
    for (category, delta) in &comparison.category_deltas {
        if *delta != 0.0 {
            println!("- {}: {:+.1}", category.label(), delta);
        }
    }
}

fn sample_property() -> PropertyMetrics {
    PropertyMetrics::new()
        .with_value("noi-yield", 7.2)
        .with_value("cash-on-cash", 8.1)
        .with_value("occupancy-rate", 94.0)
        .with_value("expense-ratio", 41.0)
        .with_value("rent-collection", 97.5)
        .with_value("break-even-ratio", 74.0)
        .with_value("market-price-growth", 5.5)
        .with_value("rent-growth-trend", 4.8)
        .with_value("dscr", 1.52)
        .with_value("ltv", 62.0)
        .with_value("walk-transit-score", 78.0)
        .with_value("school-quality", 7.5)
        .with_value("crime-index", 85.0)
        .with_value("effective-age", 12.0)
        .with_value("deferred-maintenance", 6.0)
        .with_value("tenant-credit", 55.0)
        .with_value("walt", 3.5)
        .with_value("title-survey", true)
        .with_value("environmental", true)
        .with_value("zoning-permits", true)
        .with_value("insurance-coverage", false)
        .with_trend(Category::Cashflow, Trend::Up)
        .with_trend(Category::Appreciation, Trend::Up)
        .with_trend(Category::Financing, Trend::Down)
        .with_confidence(Category::Liquidity, 0.4)
}

fn sample_property_last_quarter() -> PropertyMetrics {
    sample_property()
        .with_value("occupancy-rate", 89.0)
        .with_value("rent-collection", 94.0)
        .with_value("deferred-maintenance", 11.0)
}

fn sample_candidates() -> Vec<DealCandidate> {
    let listing = |id: &str, name: &str, units: u32, metrics: PropertyMetrics| DealCandidate {
        id: id.to_string(),
        name: name.to_string(),
        address: None,
        units: Some(units),
        price: None,
        metrics,
    };

    vec![
        listing("mls-1041", "Cedar Row Apartments", 212, sample_property()),
        listing(
            "mls-2210",
            "Harbor View Lofts",
            180,
            sample_property()
                .with_value("dscr", 1.85)
                .with_value("ltv", 54.0)
                .with_value("asset-class-liquidity", 8.0)
                .with_value("buyer-pool-depth", 8.5),
        ),
        listing("mls-3302", "Parkside Gardens", 240, PropertyMetrics::new()),
    ]
}
