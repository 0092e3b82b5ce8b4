//! Fixed settings of the trainer and the prediction service.
//!
//! Both binaries run with [`Default`] values; there are no flags or
//! environment overrides.

use crate::classifiers::{LogisticRegressionParams, RandomForestParams};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DATASET_PATH: &str = "student_performance.csv";
pub const ARTIFACT_PATH: &str = "student_model.json";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5002;

const DEFAULT_SEED: u64 = 42;

fn default_dataset_path() -> PathBuf {
    PathBuf::from(DATASET_PATH)
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from(ARTIFACT_PATH)
}

fn default_test_fraction() -> f64 {
    0.2
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_preview_rows() -> usize {
    5
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerSettings {
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,
    /// Share of rows held out for scoring, in `(0, 1)`.
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
    /// Seed of the train/test shuffle.
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
    #[serde(default)]
    pub logistic: LogisticRegressionParams,
    #[serde(default)]
    pub forest: RandomForestParams,
}

impl Default for TrainerSettings {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            artifact_path: default_artifact_path(),
            test_fraction: default_test_fraction(),
            seed: default_seed(),
            preview_rows: default_preview_rows(),
            logistic: LogisticRegressionParams::default(),
            forest: RandomForestParams::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            artifact_path: default_artifact_path(),
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trainer_defaults() {
        let s = TrainerSettings::default();
        assert_eq!(s.dataset_path, PathBuf::from("student_performance.csv"));
        assert_eq!(s.artifact_path, PathBuf::from("student_model.json"));
        assert_eq!(s.test_fraction, 0.2);
        assert_eq!(s.seed, 42);
        assert_eq!(s.forest.seed, 42);
    }

    #[test]
    fn server_defaults() {
        let s = ServerSettings::default();
        assert_eq!(s.port, 5002);
        assert_eq!(s.artifact_path, PathBuf::from("student_model.json"));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let s: TrainerSettings =
            serde_json::from_str(r#"{"seed": 7, "forest": {"n_trees": 3}}"#).unwrap();
        assert_eq!(s.seed, 7);
        assert_eq!(s.forest.n_trees, 3);
        assert_eq!(s.forest.min_samples_split, 2);
        assert_eq!(s.test_fraction, 0.2);
        assert_eq!(s, TrainerSettings {
            seed: 7,
            forest: RandomForestParams {
                n_trees: 3,
                ..RandomForestParams::default()
            },
            ..TrainerSettings::default()
        });
    }
}
