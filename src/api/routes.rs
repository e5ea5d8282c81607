use crate::api::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::workflows::applications::{
    application_router, ApplicationRepository, ApplicationService,
};
use crate::workflows::connection::{connection_router, ConnectionRepository, ConnectionService};
use crate::workflows::status::{correction_required_statuses, is_correction_required_status};

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyRequest {
    #[serde(default)]
    pub(crate) status: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct ClassifyResponse {
    pub(crate) status: Option<String>,
    pub(crate) correction_required: bool,
}

pub(crate) fn status_routes() -> axum::Router {
    axum::Router::new()
        .route(
            "/api/v1/statuses/correction-required",
            axum::routing::get(correction_statuses_endpoint),
        )
        .route(
            "/api/v1/statuses/classify",
            axum::routing::post(classify_endpoint),
        )
}

pub(crate) fn with_workflow_routes<A, C>(
    applications: Arc<ApplicationService<A>>,
    connection: Arc<ConnectionService<C>>,
) -> axum::Router
where
    A: ApplicationRepository + 'static,
    C: ConnectionRepository + 'static,
{
    application_router(applications)
        .merge(connection_router(connection))
        .merge(status_routes())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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

pub(crate) async fn correction_statuses_endpoint() -> Json<Vec<&'static str>> {
    Json(correction_required_statuses().to_vec())
}

pub(crate) async fn classify_endpoint(
    Json(payload): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let correction_required = is_correction_required_status(payload.status.as_deref());
    Json(ClassifyResponse {
        status: payload.status,
        correction_required,
    })
}
