use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to read word list {path}: {source}")]
    ReadWords { path: PathBuf, source: io::Error },

    #[error("failed to fetch \"{word}\": {cause}")]
    Fetch { word: String, cause: FetchCause },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize entries: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("scrape task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Why a single page fetch failed.
#[derive(Debug, Error)]
pub enum FetchCause {
    #[error("response status is {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
