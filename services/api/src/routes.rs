use crate::infra::{resolve_profile, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use bloom_engine::error::AppError;
use bloom_engine::scoring::catalog::CategoryCatalogView;
use bloom_engine::scoring::radar::radar_to_category_scores;
use bloom_engine::scoring::scale::{interpret, total_64_to_100, ScoreInterpretation};
use bloom_engine::scoring::{
    compare, total_score, BloomStatus, Category, CategoryValue, PropertyMetrics, ScoreComparison,
    ScoreHistoryEntry, Scorecard, StatusInfo, WeightingProfile,
};
use bloom_engine::workflows::{rank_deals, DealCandidate, HuntCriteria, HuntReport, MetricsImporter};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::io::Cursor;
use tracing::{debug, info};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ScoreRequest {
    #[serde(default)]
    pub(crate) metrics: PropertyMetrics,
    /// `metric,value` CSV; explicit `metrics.values` override its rows.
    #[serde(default)]
    pub(crate) metrics_csv: Option<String>,
    #[serde(default)]
    pub(crate) profile: Option<String>,
    #[serde(default)]
    pub(crate) custom_weights: Option<BTreeMap<Category, f64>>,
    #[serde(default)]
    pub(crate) previous: Option<ScoreHistoryEntry>,
    /// Reject metric ids the catalog does not define instead of ignoring them.
    #[serde(default)]
    pub(crate) strict: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    #[serde(flatten)]
    pub(crate) scorecard: Scorecard,
    pub(crate) history_entry: ScoreHistoryEntry,
    pub(crate) interpretations: BTreeMap<Category, ScoreInterpretation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) comparison: Option<ScoreComparison>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) ignored_metrics: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankDealsRequest {
    pub(crate) candidates: Vec<DealCandidate>,
    #[serde(default)]
    pub(crate) profile: Option<String>,
    #[serde(default)]
    pub(crate) min_total: Option<f64>,
    #[serde(default)]
    pub(crate) min_units: Option<u32>,
    #[serde(default)]
    pub(crate) max_price: Option<f64>,
}

/// Legacy ten-axis radar scores (0-10), in axis order.
#[derive(Debug, Deserialize)]
pub(crate) struct RadarRequest {
    pub(crate) axes: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RadarResponse {
    pub(crate) categories: BTreeMap<Category, f64>,
    pub(crate) total_score: f64,
    pub(crate) normalized_score: f64,
    pub(crate) status: StatusInfo,
}

pub(crate) fn bloom_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/catalog", get(catalog_endpoint))
        .route("/api/v1/profiles", get(profiles_endpoint))
        .route("/api/v1/properties/score", post(score_property_endpoint))
        .route("/api/v1/deals/rank", post(rank_deals_endpoint))
        .route("/api/v1/radar/convert", post(radar_convert_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalog_endpoint(Extension(state): Extension<AppState>) -> Json<serde_json::Value> {
    let categories: Vec<CategoryCatalogView<'_>> = state.scorer.catalog().view();
    Json(json!({ "categories": categories }))
}

pub(crate) async fn profiles_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<Vec<WeightingProfile>> {
    Json(state.scorer.registry().profiles().to_vec())
}

pub(crate) async fn score_property_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let ScoreRequest {
        metrics: explicit,
        metrics_csv,
        profile,
        custom_weights,
        previous,
        strict,
    } = payload;

    let catalog = state.scorer.catalog();
    let mut metrics = match metrics_csv {
        Some(csv) => MetricsImporter::from_reader(Cursor::new(csv.into_bytes()), catalog)?,
        None => PropertyMetrics::new(),
    };
    // Ids are matched the same way the CSV importer matches them.
    metrics.values.extend(
        explicit
            .values
            .into_iter()
            .map(|(id, value)| (id.trim().to_ascii_lowercase(), value)),
    );
    metrics.trends = explicit.trends;
    metrics.confidence = explicit.confidence;
    metrics.notes = explicit.notes;

    if strict {
        metrics.ensure_known_ids(catalog)?;
    }
    let ignored_metrics: Vec<String> = metrics
        .unknown_ids(catalog)
        .into_iter()
        .map(str::to_string)
        .collect();
    if !ignored_metrics.is_empty() {
        debug!(ignored = ?ignored_metrics, "ignoring metrics outside the catalog");
    }

    let profile = resolve_profile(&state, profile.as_deref(), custom_weights)?;
    let scorecard = state.scorer.score(&metrics, &profile);
    let history_entry = ScoreHistoryEntry::from_scorecard(Utc::now(), &scorecard);
    let comparison = previous.map(|previous| compare(&previous, &history_entry));
    let interpretations = scorecard
        .categories
        .iter()
        .map(|assessment| (assessment.category(), interpret(assessment.value())))
        .collect();

    info!(
        profile = %scorecard.profile,
        total = scorecard.total_score,
        status = scorecard.status.status.id(),
        supplied = metrics.values.len(),
        "scored property"
    );

    Ok(Json(ScoreResponse {
        scorecard,
        history_entry,
        interpretations,
        comparison,
        ignored_metrics,
    }))
}

pub(crate) async fn rank_deals_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RankDealsRequest>,
) -> Result<Json<HuntReport>, AppError> {
    let profile = resolve_profile(&state, payload.profile.as_deref(), None)?;
    let criteria = HuntCriteria {
        min_total: payload.min_total.unwrap_or(state.scoring.hunt_min_score),
        min_units: payload.min_units,
        max_price: payload.max_price,
    };

    let report = rank_deals(&state.scorer, &payload.candidates, &profile, &criteria);
    info!(
        scanned = report.scanned,
        qualified = report.deals.len(),
        min_total = report.min_total,
        "ranked deals"
    );

    Ok(Json(report))
}

pub(crate) async fn radar_convert_endpoint(
    Json(payload): Json<RadarRequest>,
) -> Json<RadarResponse> {
    let categories = radar_to_category_scores(&payload.axes);
    let scores: Vec<(Category, f64)> = categories
        .iter()
        .map(|(category, score)| (*category, *score))
        .collect();
    let total = total_score(&scores);

    debug!(axes = payload.axes.len(), total, "converted radar scores");

    Json(RadarResponse {
        categories,
        total_score: total,
        normalized_score: total_64_to_100(total),
        status: BloomStatus::classify(total).info(),
    })
}
