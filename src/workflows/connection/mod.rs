//! Database connection settings and the bookkeeping kept about them.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{
    ConnectionSettingsError, DbConnectionMetadata, DbConnectionRecord, DbConnectionSettings,
    VerificationReport, VerificationResult,
};
pub use repository::{ConnectionRepository, RepositoryError};
pub use router::{connection_router, ApplyConnectionRequest, ConnectionView};
pub use service::{ConnectionService, ConnectionServiceError};
