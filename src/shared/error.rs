//! Widget error types.
//!
//! All variants are serializable for the webview bridge, which surfaces them
//! as transient notices. None of them are fatal: every error leaves the
//! persisted state untouched and the widget usable.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Unit id not defined for the requested category
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Rejected input (empty save value, unknown category, unparseable quick entry)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Favorite position outside the saved list
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    /// Persistence failure
    #[error("Storage error: {0}")]
    Storage(String),
}

// Implement conversion from standard errors
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("Serialization error: {}", err))
    }
}

// Helper type alias for command results
pub type AppResult<T> = Result<T, AppError>;
