mod estimators;
mod evaluators;
mod measurement;

pub use estimators::{Estimator, MeanEstimator};
pub use evaluators::{ClassificationEvaluator, PerformanceEvaluator};
pub use measurement::Measurement;
