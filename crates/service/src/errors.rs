use sea_orm::DbErr;
use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Classify a driver error; unique and foreign-key violations become `Conflict`.
    pub fn from_db(e: DbErr) -> Self {
        match ModelError::from(e) {
            ModelError::Conflict(msg) => Self::Conflict(msg),
            ModelError::Db(msg) => Self::Db(msg),
            other => Self::Model(other),
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Model(ModelError::Validation(_)) => 1001,
            ServiceError::Conflict(_) | ServiceError::Model(ModelError::Conflict(_)) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => 1200,
        }
    }
}
