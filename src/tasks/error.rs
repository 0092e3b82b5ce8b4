use crate::persistence::ArtifactError;
use crate::streams::DatasetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrainError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(
        "not enough rows to split: {rows} rows give {train} training and {test} held-out rows"
    )]
    InsufficientData {
        rows: usize,
        train: usize,
        test: usize,
    },

    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error("cannot write training report: {0}")]
    Report(#[from] std::io::Error),
}
