use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure sites of a single fetch. Nothing here is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to create output directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open output file {path:?}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body from {url}")]
    ReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    /// True for the transport side of the taxonomy, false for filesystem errors.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Request { .. } | FetchError::ReadBody { .. })
    }
}
