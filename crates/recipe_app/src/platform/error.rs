use std::io;
use std::path::PathBuf;

use recipe_engine::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("invalid server address: {0}")]
    Client(#[from] FetchError),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
