use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use crate::workflows::applications::{
    ApplicationId, ApplicationRecord, ApplicationRepository,
    RepositoryError as ApplicationRepositoryError,
};
use crate::workflows::connection::{
    ConnectionRepository, DbConnectionRecord, RepositoryError as ConnectionRepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn upsert_with<F, E>(&self, id: &ApplicationId, build: F) -> Result<ApplicationRecord, E>
    where
        F: FnOnce(Option<&ApplicationRecord>) -> Result<ApplicationRecord, E>,
        E: From<ApplicationRepositoryError>,
    {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| ApplicationRepositoryError::Unavailable("mutex poisoned".to_string()))?;
        let record = build(guard.get(id))?;
        guard.insert(id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(
        &self,
        id: &ApplicationId,
    ) -> Result<Option<ApplicationRecord>, ApplicationRepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| ApplicationRepositoryError::Unavailable("mutex poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<ApplicationRecord>, ApplicationRepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| ApplicationRepositoryError::Unavailable("mutex poisoned".to_string()))?;
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryConnectionRepository {
    record: Arc<Mutex<Option<DbConnectionRecord>>>,
}

impl ConnectionRepository for InMemoryConnectionRepository {
    fn load(&self) -> Result<Option<DbConnectionRecord>, ConnectionRepositoryError> {
        let guard = self
            .record
            .lock()
            .map_err(|_| ConnectionRepositoryError::Unavailable("mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, record: DbConnectionRecord) -> Result<(), ConnectionRepositoryError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|_| ConnectionRepositoryError::Unavailable("mutex poisoned".to_string()))?;
        *guard = Some(record);
        Ok(())
    }
}
