//! Error types for codekit-speech.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for all speech operations.
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A source file (audio, dictionary, grammar) could not be read.
    #[error("Cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Normalized transport failure: non-success HTTP status or a
    /// connection-level error. `status` is `None` when the request never
    /// produced a response.
    #[error("Service error (status {status:?}): {message}")]
    Service {
        status: Option<u16>,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SpeechError {
    /// Service error from a non-success HTTP status and its response body.
    pub fn service_status(status: u16, body: impl Into<String>) -> Self {
        Self::Service {
            status: Some(status),
            message: body.into(),
            source: None,
        }
    }

    /// Service error from a transport failure, keeping the cause.
    pub fn service_transport(source: reqwest::Error) -> Self {
        Self::Service {
            status: source.status().map(|s| s.as_u16()),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// File access error carrying the offending path.
    pub fn file_access(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SpeechError>;
