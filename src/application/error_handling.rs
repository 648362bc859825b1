// src/application/error_handling.rs
//
// Error Handling for shell commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides a consistent error format for the presentation layer
// - Logs errors that the user cannot fix

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Dog not in the list it was looked up in
    NotFound,

    /// Bad field value or unparseable input
    Validation,

    /// Identity already taken
    Duplicate,

    /// Nothing to undo/redo, or the history no longer fits the lists
    History,

    /// Store failure
    Persistence,

    /// Anything else
    Internal,
}

impl ErrorResponse {
    pub fn from_app_error(error: AppError) -> Self {
        let message = error.to_string();
        match error {
            AppError::NotFound { .. } => Self::new(ErrorType::NotFound, message, None),

            AppError::Validation(domain_error) => Self::new(
                ErrorType::Validation,
                "Invalid dog".to_string(),
                Some(domain_error.to_string()),
            ),

            AppError::Duplicate { .. } => Self::new(ErrorType::Duplicate, message, None),

            AppError::NothingToUndo | AppError::NothingToRedo => {
                Self::new(ErrorType::History, message, None)
            }

            AppError::HistoryConflict(_) | AppError::IndexOutOfBounds { .. } => {
                log::warn!("History no longer matches the lists: {}", message);
                Self::new(
                    ErrorType::History,
                    "The history no longer matches the lists".to_string(),
                    Some(message),
                )
            }

            AppError::Persistence(persistence_error) => {
                log::error!("Persistence error: {:?}", persistence_error);
                Self::new(
                    ErrorType::Persistence,
                    "Storage operation failed".to_string(),
                    Some(persistence_error.to_string()),
                )
            }

            AppError::Other(_) => {
                log::error!("{}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    /// Create validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorType::Validation, message.into(), None)
    }

    fn new(error_type: ErrorType, message: String, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message,
            details,
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "Error: {} ({})", self.message, details),
            None => write!(f, "Error: {}", self.message),
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}
