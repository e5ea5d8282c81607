use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::domain::{
    ConnectionSettingsError, DbConnectionRecord, DbConnectionSettings, VerificationReport,
    VerificationResult,
};
use super::repository::{ConnectionRepository, RepositoryError};

/// Records apply and verification events against the stored connection settings.
///
/// The service never opens a database connection itself; whoever tests the
/// connection reports the outcome through [`ConnectionService::record_verification`].
pub struct ConnectionService<R> {
    repository: Arc<R>,
}

impl<R> ConnectionService<R>
where
    R: ConnectionRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn current(&self) -> Result<DbConnectionRecord, ConnectionServiceError> {
        let record = self.repository.load()?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Replace the active settings, keeping prior verification history.
    pub fn apply(
        &self,
        settings: DbConnectionSettings,
        at: DateTime<Utc>,
    ) -> Result<DbConnectionRecord, ConnectionServiceError> {
        settings.validate()?;
        let mut record = match self.repository.load()? {
            Some(mut existing) => {
                existing.settings = settings;
                existing
            }
            None => DbConnectionRecord::new(settings),
        };
        record.metadata.record_applied(at);
        self.repository.save(record.clone())?;

        info!(
            database_url = %record.settings.redacted_url(),
            "database connection settings applied"
        );
        Ok(record)
    }

    pub fn record_verification(
        &self,
        report: VerificationReport,
        at: DateTime<Utc>,
    ) -> Result<DbConnectionRecord, ConnectionServiceError> {
        let mut record = self.current()?;
        let VerificationReport { result, message } = report;

        match result {
            VerificationResult::Success => info!(
                database_url = %record.settings.redacted_url(),
                "database connection verified"
            ),
            VerificationResult::Failure => warn!(
                database_url = %record.settings.redacted_url(),
                detail = message.as_deref().unwrap_or(""),
                "database connection verification failed"
            ),
        }

        record.metadata.record_verification(result, message, at);
        self.repository.save(record.clone())?;
        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectionServiceError {
    #[error(transparent)]
    InvalidSettings(#[from] ConnectionSettingsError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
