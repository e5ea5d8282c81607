use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{
    DbConnectionMetadata, DbConnectionRecord, DbConnectionSettings, VerificationReport,
};
use super::repository::{ConnectionRepository, RepositoryError};
use super::service::{ConnectionService, ConnectionServiceError};

/// Settings as exposed over HTTP: the password is replaced by a presence flag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionView {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub has_password: bool,
    pub url: String,
    pub metadata: DbConnectionMetadata,
}

impl From<&DbConnectionRecord> for ConnectionView {
    fn from(record: &DbConnectionRecord) -> Self {
        let settings = &record.settings;
        Self {
            host: settings.host.clone(),
            port: settings.port,
            database: settings.database.clone(),
            user: settings.user.clone(),
            has_password: settings.password.is_some(),
            url: settings.redacted_url(),
            metadata: record.metadata.clone(),
        }
    }
}

/// Apply request body; either a full URL or discrete fields.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApplyConnectionRequest {
    Url { url: String },
    Settings(DbConnectionSettings),
}

pub fn connection_router<R>(service: Arc<ConnectionService<R>>) -> Router
where
    R: ConnectionRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/db-connection",
            get(current_handler::<R>).put(apply_handler::<R>),
        )
        .route(
            "/api/v1/db-connection/verification",
            post(verification_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn current_handler<R>(
    State(service): State<Arc<ConnectionService<R>>>,
) -> Response
where
    R: ConnectionRepository + 'static,
{
    match service.current() {
        Ok(record) => (StatusCode::OK, axum::Json(ConnectionView::from(&record))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn apply_handler<R>(
    State(service): State<Arc<ConnectionService<R>>>,
    axum::Json(request): axum::Json<ApplyConnectionRequest>,
) -> Response
where
    R: ConnectionRepository + 'static,
{
    let settings = match request {
        ApplyConnectionRequest::Url { url } => match DbConnectionSettings::from_url(&url) {
            Ok(settings) => settings,
            Err(err) => return error_response(err.into()),
        },
        ApplyConnectionRequest::Settings(settings) => settings,
    };

    match service.apply(settings, Utc::now()) {
        Ok(record) => (StatusCode::OK, axum::Json(ConnectionView::from(&record))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn verification_handler<R>(
    State(service): State<Arc<ConnectionService<R>>>,
    axum::Json(report): axum::Json<VerificationReport>,
) -> Response
where
    R: ConnectionRepository + 'static,
{
    match service.record_verification(report, Utc::now()) {
        Ok(record) => (StatusCode::OK, axum::Json(ConnectionView::from(&record))).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ConnectionServiceError) -> Response {
    let status = match &err {
        ConnectionServiceError::InvalidSettings(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ConnectionServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ConnectionServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
