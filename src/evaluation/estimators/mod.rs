mod estimator;
mod mean_estimator;

pub use estimator::Estimator;
pub use mean_estimator::MeanEstimator;
