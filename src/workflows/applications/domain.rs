use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::status::WorkflowStatus;

/// Identifier wrapper for homestay applications.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

/// Latest known workflow state of a homestay application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    pub applicant_name: String,
    pub status: WorkflowStatus,
    pub updated_at: DateTime<Utc>,
}

impl ApplicationRecord {
    pub fn summary_view(&self) -> ApplicationSummaryView {
        ApplicationSummaryView {
            application_id: self.application_id.clone(),
            applicant_name: self.applicant_name.clone(),
            status: self.status.clone(),
            correction_required: self.status.is_correction_required(),
            updated_at: self.updated_at,
        }
    }
}

/// Row rendered by list views, carrying the precomputed correction flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSummaryView {
    pub application_id: ApplicationId,
    pub applicant_name: String,
    pub status: WorkflowStatus,
    pub correction_required: bool,
    pub updated_at: DateTime<Utc>,
}

/// Narrowing applied to list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ApplicationFilter {
    #[serde(default)]
    pub correction_required: Option<bool>,
}

impl ApplicationFilter {
    pub fn needing_correction() -> Self {
        Self {
            correction_required: Some(true),
        }
    }

    pub fn matches(&self, record: &ApplicationRecord) -> bool {
        match self.correction_required {
            Some(expected) => record.status.is_correction_required() == expected,
            None => true,
        }
    }
}

/// Body for status transitions; the applicant name is only needed on first sight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: WorkflowStatus,
    #[serde(default)]
    pub applicant_name: Option<String>,
}
