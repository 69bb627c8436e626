//! Error types for the ig-downloader application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Usage errors
    #[error("{0}")]
    Usage(String),

    // Request errors
    #[error("Invalid request URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Download errors
    #[error("No asset URL found in post metadata for '{0}'")]
    EmptyAssetUrl(String),

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save {}: {source}", path.display())]
    SaveFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Download failed: {0}")]
    Download(String),
}

impl Error {
    /// Whether this error aborts the process under every error policy.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Usage(_) | Error::CreateDir { .. })
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    use super::Result;

    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;

    /// Exit code for the outcome of a run.
    ///
    /// Absorbed errors never reach here, so any error that does aborts.
    pub fn for_result<T>(result: &Result<T>) -> i32 {
        match result {
            Ok(_) => SUCCESS,
            Err(_) => ABORT,
        }
    }
}
