use sea_orm::DbErr;

use crate::loader::LoadError;

/// Failures surfaced by the service layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// No game with the requested id
    #[error("{0}")]
    NotFound(String),
    /// The store rejected a write
    #[error("{0}")]
    InvalidObject(String),
    /// Query parameters out of range or unparseable
    #[error("{0}")]
    InvalidRequest(String),
    /// The import file is missing or malformed
    #[error("failed to load games: {0}")]
    DataLoad(#[from] LoadError),
    /// A read query failed
    #[error("database error: {0}")]
    Persistence(#[from] DbErr),
}
