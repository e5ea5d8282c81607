use super::domain::DbConnectionRecord;

/// Storage abstraction for the single active connection record.
pub trait ConnectionRepository: Send + Sync {
    fn load(&self) -> Result<Option<DbConnectionRecord>, RepositoryError>;
    fn save(&self, record: DbConnectionRecord) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
