use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("cannot access model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode model: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("model artifact {path} is corrupt: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("model artifact {path} is invalid: {reason}")]
    Invalid { path: PathBuf, reason: String },

    #[error("cannot move model artifact into place: {0}")]
    Persist(#[from] tempfile::PersistError),
}
