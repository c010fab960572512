use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::bloom_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use bloom_engine::config::AppConfig;
use bloom_engine::error::AppError;
use bloom_engine::scoring::{validate_configuration, Catalog, PropertyScorer, WeightingRegistry};
use bloom_engine::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Catalog::standard();
    let registry = WeightingRegistry::standard();
    validate_configuration(&catalog, &registry)?;
    info!(
        sub_criteria = catalog.len(),
        profiles = registry.profiles().len(),
        "scoring configuration validated"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        scorer: Arc::new(PropertyScorer::new(Arc::new(catalog), Arc::new(registry))),
        scoring: config.scoring,
    };

    let app = bloom_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        default_profile = %config.scoring.default_profile,
        "bloom scoring service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
