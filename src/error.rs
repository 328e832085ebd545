// SPDX-License-Identifier: MPL-2.0
use crate::domain::error::MediaError;
use thiserror::Error;

/// Crate-level error.
///
/// Per-item media failures never surface here during ingestion; they are
/// collected on the batch report instead. This type covers the fallible
/// edges: configuration, filesystem access in the CLI, and driver shutdown.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Media Error: {0}")]
    Media(MediaError),

    #[error("Runtime Error: {0}")]
    Runtime(String),
}

impl From<MediaError> for Error {
    fn from(err: MediaError) -> Self {
        Error::Media(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Runtime(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
