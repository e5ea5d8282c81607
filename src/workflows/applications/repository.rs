use super::domain::{ApplicationId, ApplicationRecord};

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ApplicationRepository: Send + Sync {
    /// Builds the next record from the stored one and saves it in a single step.
    fn upsert_with<F, E>(&self, id: &ApplicationId, build: F) -> Result<ApplicationRecord, E>
    where
        F: FnOnce(Option<&ApplicationRecord>) -> Result<ApplicationRecord, E>,
        E: From<RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn list(&self) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
