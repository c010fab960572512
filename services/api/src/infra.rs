use bloom_engine::config::ScoringConfig;
use bloom_engine::scoring::{Category, ProfileId, PropertyScorer, ScoringError, WeightingProfile};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) scorer: Arc<PropertyScorer>,
    pub(crate) scoring: ScoringConfig,
}

/// Resolves the weighting for a request. Custom weights win over a named
/// profile; an unrecognised name falls back to `equal` instead of failing.
pub(crate) fn resolve_profile(
    state: &AppState,
    requested: Option<&str>,
    custom_weights: Option<BTreeMap<Category, f64>>,
) -> Result<WeightingProfile, ScoringError> {
    if let Some(weights) = custom_weights {
        return Ok(WeightingProfile::custom(weights)?);
    }

    let profile_id = match requested {
        Some(raw) => raw.parse::<ProfileId>().unwrap_or_else(|_| {
            info!(requested = raw, "unknown weighting profile, using equal weights");
            ProfileId::Equal
        }),
        None => state.scoring.default_profile,
    };

    Ok(state.scorer.registry().get(profile_id).clone())
}

#[cfg(test)]
pub(crate) fn test_state(ready: bool) -> AppState {
    use metrics_exporter_prometheus::PrometheusBuilder;

    AppState {
        readiness: Arc::new(AtomicBool::new(ready)),
        metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        scorer: Arc::new(PropertyScorer::standard()),
        scoring: ScoringConfig::default(),
    }
}
