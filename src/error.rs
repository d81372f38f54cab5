// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Root directory '{path}' does not exist")]
    RootNotFound { path: PathBuf },

    #[error("Root path '{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Directory name '{path}' is not valid UTF-8 and cannot be used as a group key")]
    NonUtf8Name { path: PathBuf },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
