use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Router,
};
use chrono::Utc;
use serde_json::json;

use super::domain::{ApplicationFilter, ApplicationId, StatusUpdate};
use super::repository::{ApplicationRepository, RepositoryError};
use super::service::{ApplicationService, ApplicationServiceError};

/// Router builder exposing list, lookup and status-transition endpoints.
pub fn application_router<R>(service: Arc<ApplicationService<R>>) -> Router
where
    R: ApplicationRepository + 'static,
{
    Router::new()
        .route("/api/v1/applications", get(list_handler::<R>))
        .route(
            "/api/v1/applications/:application_id",
            get(detail_handler::<R>),
        )
        .route(
            "/api/v1/applications/:application_id/status",
            put(status_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<ApplicationService<R>>>,
    Query(filter): Query<ApplicationFilter>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.list(filter) {
        Ok(rows) => (StatusCode::OK, axum::Json(rows)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<ApplicationService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.get(&ApplicationId(application_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.summary_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<ApplicationService<R>>>,
    Path(application_id): Path<String>,
    axum::Json(update): axum::Json<StatusUpdate>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.record_status(ApplicationId(application_id), update, Utc::now()) {
        Ok(record) => (StatusCode::OK, axum::Json(record.summary_view())).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ApplicationServiceError) -> Response {
    let status = match &err {
        ApplicationServiceError::MissingApplicantName => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ApplicationServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
