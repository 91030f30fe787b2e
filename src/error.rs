use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Failed to serialize plan: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SeedError>;

/// Why a single item was not stored. Never aborts a run.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to write file: {0}")]
    Write(#[from] std::io::Error),
}
