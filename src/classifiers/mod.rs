pub mod classifier;
pub mod logistic_regression;
pub mod random_forest;
pub mod split_criteria;
mod trained_model;

pub use classifier::Classifier;
pub use logistic_regression::{LogisticRegression, LogisticRegressionParams};
pub use random_forest::{RandomForest, RandomForestParams};
pub use trained_model::{ModelKind, TrainedModel};
