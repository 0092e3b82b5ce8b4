use crate::classifiers::{LogisticRegression, ModelKind, RandomForest, TrainedModel};
use crate::config::TrainerSettings;
use crate::core::instances::Dataset;
use crate::persistence::save_model;
use crate::streams::CsvFileStream;
use crate::tasks::TrainError;
use crate::tasks::model_selection::{fit_and_score, select};
use crate::tasks::train_test_split::train_test_split;
use std::io::Write;

/// Outcome of one training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    pub rows: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub logistic_accuracy: f64,
    pub forest_accuracy: f64,
    pub chosen: ModelKind,
    pub chosen_accuracy: f64,
}

pub struct Trainer {
    settings: TrainerSettings,
}

impl Trainer {
    pub fn new(settings: TrainerSettings) -> Result<Self, TrainError> {
        let f = settings.test_fraction;
        if !(f.is_finite() && f > 0.0 && f < 1.0) {
            return Err(TrainError::InvalidSetting(format!(
                "test_fraction must be in (0, 1), got {f}"
            )));
        }
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &TrainerSettings {
        &self.settings
    }

    /// Loads the dataset, fits both candidates, and persists the better one.
    ///
    /// The human-readable report goes to `out`. Nothing is written to the
    /// artifact path unless every earlier step succeeded.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<TrainingReport, TrainError> {
        let s = &self.settings;
        if let Ok(json) = serde_json::to_string(s) {
            log::debug!("trainer settings: {json}");
        }

        let mut stream = CsvFileStream::open(&s.dataset_path)?;
        let dataset = Dataset::from_stream(&mut stream)?;
        log::info!(
            "loaded {} rows from {}",
            dataset.len(),
            s.dataset_path.display()
        );

        writeln!(out, "{}", dataset.preview(s.preview_rows))?;
        writeln!(out)?;
        writeln!(out, "{}", dataset.describe())?;
        writeln!(out)?;

        let split = train_test_split(dataset.len(), s.test_fraction, s.seed);
        if split.train.is_empty() || split.test.is_empty() {
            return Err(TrainError::InsufficientData {
                rows: dataset.len(),
                train: split.train.len(),
                test: split.test.len(),
            });
        }
        let train = dataset.select(&split.train);
        let test = dataset.select(&split.test);
        log::info!(
            "split {} rows into {} training and {} held-out",
            dataset.len(),
            train.len(),
            test.len()
        );

        let logistic = fit_and_score(
            TrainedModel::LogisticRegression(LogisticRegression::new(s.logistic.clone())),
            &train,
            &test,
        );
        log::info!(
            "fitted {} (accuracy {:.4}, kappa {:.4})",
            logistic.kind().label(),
            logistic.accuracy,
            logistic.kappa
        );

        let forest = fit_and_score(
            TrainedModel::RandomForest(RandomForest::new(s.forest.clone())),
            &train,
            &test,
        );
        log::info!(
            "fitted {} (accuracy {:.4}, kappa {:.4})",
            forest.kind().label(),
            forest.accuracy,
            forest.kappa
        );

        writeln!(out, "Logistic Regression Accuracy: {:.4}", logistic.accuracy)?;
        writeln!(out, "Random Forest Accuracy: {:.4}", forest.accuracy)?;

        let logistic_accuracy = logistic.accuracy;
        let forest_accuracy = forest.accuracy;
        let best = select(logistic, forest);

        save_model(&best.model, &s.artifact_path)?;
        log::info!("wrote artifact {}", s.artifact_path.display());

        writeln!(
            out,
            "Saved {} model (Accuracy: {:.2}%)",
            best.kind().label(),
            best.accuracy * 100.0
        )?;

        Ok(TrainingReport {
            rows: dataset.len(),
            train_rows: train.len(),
            test_rows: test.len(),
            logistic_accuracy,
            forest_accuracy,
            chosen: best.kind(),
            chosen_accuracy: best.accuracy,
        })
    }
}
