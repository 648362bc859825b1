// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Failures raised by a storage collaborator.
///
/// The core never inspects these; they travel to the caller unchanged
/// wrapped in [`AppError::Persistence`].
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt store: {0}")]
    Corrupt(String),
}

impl From<r2d2::Error> for PersistenceError {
    fn from(err: r2d2::Error) -> Self {
        PersistenceError::Pool(err.to_string())
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    #[error("Dog {name} ({breed}) already exists")]
    Duplicate { name: String, breed: String },

    #[error("Dog {name} ({breed}) does not exist")]
    NotFound { name: String, breed: String },

    #[error("Position {index} is out of bounds for a list of {len} dogs")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("There is nothing to undo!")]
    NothingToUndo,

    #[error("There is nothing to redo!")]
    NothingToRedo,

    #[error("History conflict: {0}")]
    HistoryConflict(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    pub fn duplicate(name: &str, breed: &str) -> Self {
        AppError::Duplicate {
            name: name.to_string(),
            breed: breed.to_string(),
        }
    }

    pub fn not_found(name: &str, breed: &str) -> Self {
        AppError::NotFound {
            name: name.to_string(),
            breed: breed.to_string(),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
