//! Application error type shared by the storage, services and commands layers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Local file access failed (avatar ingestion).
    #[error("IO error: {0}")]
    Io(String),

    /// Reading or writing the plugin store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The page referenced something the session does not know about.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<tauri_plugin_store::Error> for AppError {
    fn from(e: tauri_plugin_store::Error) -> Self {
        AppError::Storage(e.to_string())
    }
}
