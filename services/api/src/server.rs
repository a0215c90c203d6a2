use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_funding_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use skills_funding::config::AppConfig;
use skills_funding::error::AppError;
use skills_funding::funding::FundingService;
use skills_funding::telemetry;
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

    let catalog = load_catalog(&config.catalog, None)?;
    let jurisdictions = catalog.jurisdictions().len();
    let service = Arc::new(FundingService::new(Arc::new(catalog)));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_funding_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, jurisdictions, "funding eligibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
