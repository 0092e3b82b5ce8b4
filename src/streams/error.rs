use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset {0} has no header row")]
    EmptyFile(PathBuf),

    #[error("required column not found: {0}")]
    MissingColumn(String),

    #[error("line {line}: invalid value {value:?} in column {column}")]
    InvalidValue {
        line: usize,
        column: String,
        value: String,
    },
}
