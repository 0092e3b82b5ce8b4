use crate::core::features::FeatureVector;
use crate::core::instances::Instance;

/// Batch-trained classifier over [`FeatureVector`]s.
pub trait Classifier {
    /// Fits the model from scratch on `instances`, discarding prior state.
    fn train_on_instances(&mut self, instances: &[Instance]);

    /// One non-negative score per class, or `None` before training.
    fn get_votes_for_instance(&self, features: &FeatureVector) -> Option<Vec<f64>>;

    /// Highest-voted class. Ties and untrained models resolve to class 0.
    fn predict(&self, features: &FeatureVector) -> usize {
        self.get_votes_for_instance(features)
            .map(|votes| argmax(&votes))
            .unwrap_or(0)
    }
}

/// Index of the largest finite vote; the lowest index wins ties.
pub fn argmax(votes: &[f64]) -> usize {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &v) in votes.iter().enumerate() {
        if v.is_finite() && v > best_value {
            best = i;
            best_value = v;
        }
    }
    best
}
