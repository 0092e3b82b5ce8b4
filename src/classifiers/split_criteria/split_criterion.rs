/// Scores a candidate partition of a node's class distribution.
pub trait SplitCriterion {
    /// Impurity decrease achieved by splitting `pre_split_distribution` into
    /// `post_split_distributions`. Larger is better.
    fn merit_of_split(
        &self,
        pre_split_distribution: &[f64],
        post_split_distributions: &[&[f64]],
    ) -> f64;
}
