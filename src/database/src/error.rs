use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to read ratings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse team ratings: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
