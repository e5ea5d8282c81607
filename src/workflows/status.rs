//! Workflow status tags and the correction-required taxonomy.
//!
//! Statuses are open-ended strings owned by the workflow engine. Only a small,
//! fixed subset carries meaning here: the states in which an application has
//! been handed back to the applicant or a lower-level reviewer for amendment.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

/// Statuses that send an application back for amendment, in declaration order.
pub const CORRECTION_REQUIRED_STATUSES: [&str; 4] = [
    "sent_back_for_corrections",
    "reverted_to_applicant",
    "reverted_by_dtdo",
    "objection_raised",
];

fn correction_lookup() -> &'static HashSet<&'static str> {
    static LOOKUP: OnceLock<HashSet<&'static str>> = OnceLock::new();
    LOOKUP.get_or_init(|| CORRECTION_REQUIRED_STATUSES.iter().copied().collect())
}

/// Returns `true` when `status` is one of the correction-required states.
///
/// Matching is exact and case-sensitive. An absent status never requires
/// correction.
pub fn is_correction_required_status(status: Option<&str>) -> bool {
    match status {
        Some(value) => correction_lookup().contains(value),
        None => false,
    }
}

/// The correction-required statuses in their canonical order.
pub fn correction_required_statuses() -> &'static [&'static str] {
    &CORRECTION_REQUIRED_STATUSES
}

/// String-valued lifecycle state of a homestay application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowStatus(String);

impl WorkflowStatus {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_correction_required(&self) -> bool {
        is_correction_required_status(Some(self.as_str()))
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkflowStatus {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WorkflowStatus {
    fn from(value: String) -> Self {
        Self(value)
    }
}
