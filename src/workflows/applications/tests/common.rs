use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::applications::domain::{ApplicationId, ApplicationRecord, StatusUpdate};
use crate::workflows::applications::repository::{ApplicationRepository, RepositoryError};
use crate::workflows::applications::{application_router, ApplicationService};
use crate::workflows::status::WorkflowStatus;

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for MemoryRepository {
    fn upsert_with<F, E>(&self, id: &ApplicationId, build: F) -> Result<ApplicationRecord, E>
    where
        F: FnOnce(Option<&ApplicationRecord>) -> Result<ApplicationRecord, E>,
        E: From<RepositoryError>,
    {
        let mut records = self.records.lock().expect("lock");
        let record = build(records.get(id))?;
        records.insert(id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Ok(self.records.lock().expect("lock").get(id).cloned())
    }

    fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Ok(self.records.lock().expect("lock").values().cloned().collect())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn upsert_with<F, E>(&self, _id: &ApplicationId, _build: F) -> Result<ApplicationRecord, E>
    where
        F: FnOnce(Option<&ApplicationRecord>) -> Result<ApplicationRecord, E>,
        E: From<RepositoryError>,
    {
        Err(RepositoryError::Unavailable("database offline".to_string()).into())
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (ApplicationService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ApplicationService::new(repository.clone());
    (service, repository)
}

pub(super) fn router_with_service(service: ApplicationService<MemoryRepository>) -> axum::Router {
    application_router(Arc::new(service))
}

pub(super) fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, day, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn update(status: &str, applicant_name: Option<&str>) -> StatusUpdate {
    StatusUpdate {
        status: WorkflowStatus::from(status),
        applicant_name: applicant_name.map(str::to_string),
    }
}

/// Seeds one application per status, each a day apart.
pub(super) fn seed(service: &ApplicationService<MemoryRepository>, statuses: &[(&str, &str)]) {
    for (index, (id, status)) in statuses.iter().enumerate() {
        service
            .record_status(
                ApplicationId(id.to_string()),
                update(status, Some("Tenzin Dolma")),
                at(index as u32 + 1),
            )
            .expect("seed succeeds");
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
