//! Homestay application status tracking and the list views that flag
//! applications sent back for corrections.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationFilter, ApplicationId, ApplicationRecord, ApplicationSummaryView, StatusUpdate,
};
pub use repository::{ApplicationRepository, RepositoryError};
pub use router::application_router;
pub use service::{ApplicationService, ApplicationServiceError};
