use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::domain::{
    ApplicationFilter, ApplicationId, ApplicationRecord, ApplicationSummaryView, StatusUpdate,
};
use super::repository::{ApplicationRepository, RepositoryError};

/// Tracks application status transitions and serves list views.
pub struct ApplicationService<R> {
    repository: Arc<R>,
}

impl<R> ApplicationService<R>
where
    R: ApplicationRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Record the latest status for an application, creating it on first sight.
    pub fn record_status(
        &self,
        application_id: ApplicationId,
        update: StatusUpdate,
        at: DateTime<Utc>,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let StatusUpdate {
            status,
            applicant_name,
        } = update;
        let applicant_name = applicant_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let record = self.repository.upsert_with(&application_id, |existing| {
            let applicant_name = match (applicant_name, existing) {
                (Some(name), _) => name,
                (None, Some(existing)) => existing.applicant_name.clone(),
                (None, None) => return Err(ApplicationServiceError::MissingApplicantName),
            };
            Ok(ApplicationRecord {
                application_id: application_id.clone(),
                applicant_name,
                status,
                updated_at: at,
            })
        })?;

        if record.status.is_correction_required() {
            info!(
                application_id = %record.application_id.0,
                status = %record.status,
                "application returned for corrections"
            );
        } else {
            debug!(
                application_id = %record.application_id.0,
                status = %record.status,
                "application status recorded"
            );
        }

        Ok(record)
    }

    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Summaries ordered by most recent update, ties broken by id.
    pub fn list(
        &self,
        filter: ApplicationFilter,
    ) -> Result<Vec<ApplicationSummaryView>, ApplicationServiceError> {
        let mut records: Vec<ApplicationRecord> = self
            .repository
            .list()?
            .into_iter()
            .filter(|record| filter.matches(record))
            .collect();
        records.sort_by(|left, right| {
            right
                .updated_at
                .cmp(&left.updated_at)
                .then_with(|| left.application_id.cmp(&right.application_id))
        });

        Ok(records.iter().map(ApplicationRecord::summary_view).collect())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error("applicant name is required when recording a new application")]
    MissingApplicantName,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
