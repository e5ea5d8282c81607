use crate::api::cli::ServeArgs;
use crate::api::infra::{AppState, InMemoryApplicationRepository, InMemoryConnectionRepository};
use crate::api::routes::with_workflow_routes;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::telemetry;
use crate::workflows::applications::ApplicationService;
use crate::workflows::connection::ConnectionService;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Utc;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

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

    let connection_service = Arc::new(ConnectionService::new(Arc::new(
        InMemoryConnectionRepository::default(),
    )));
    match config.database.clone() {
        Some(settings) => {
            connection_service.apply(settings, Utc::now())?;
        }
        None => warn!("DATABASE_URL not set; connection settings must be applied over HTTP"),
    }
    if config.session.secret.is_none() {
        warn!("SESSION_SECRET not set");
    }

    let application_service = Arc::new(ApplicationService::new(Arc::new(
        InMemoryApplicationRepository::default(),
    )));

    let app = with_workflow_routes(application_service, connection_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(environment = config.environment.label(), %addr, "homestay workflow service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
