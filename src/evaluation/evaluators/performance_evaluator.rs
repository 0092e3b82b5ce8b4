use crate::evaluation::Measurement;

/// Accumulates predictions against ground truth and reports metrics.
pub trait PerformanceEvaluator {
    /// Clears all accumulated results.
    fn reset(&mut self);

    /// Feeds one ground-truth class and the classifier's votes (one score
    /// per class). Implementations may skip unusable votes.
    fn add_result(&mut self, true_class: usize, class_votes: &[f64]);

    /// Snapshot of the current metrics.
    fn performance(&self) -> Vec<Measurement>;

    /// Value of a single metric by name.
    fn metric(&self, name: &str) -> Option<f64> {
        self.performance()
            .into_iter()
            .find(|m| m.name == name)
            .map(|m| m.value)
    }
}
