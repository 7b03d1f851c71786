use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryScoreStore};
use crate::routes::with_blueprint_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use zengen::config::AppConfig;
use zengen::error::AppError;
use zengen::telemetry;
use zengen::workflows::blueprint::BlueprintService;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = config.report.catalog();
    let overrides = config.report.link_overrides.len();
    let blueprint_service = Arc::new(BlueprintService::new(
        Arc::new(InMemoryScoreStore::default()),
        catalog,
    ));

    let app = with_blueprint_routes(blueprint_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, overrides, "zengen blueprint service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
