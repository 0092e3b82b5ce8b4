use crate::classifiers::split_criteria::SplitCriterion;

#[derive(Debug, Default, Clone, Copy)]
pub struct GiniSplitCriterion;

impl GiniSplitCriterion {
    pub fn new() -> Self {
        Self
    }

    pub fn compute_gini(&self, distribution: &[f64], distribution_sum_of_weights: f64) -> f64 {
        if distribution_sum_of_weights <= 0.0 {
            return 0.0;
        }
        let mut gini = 1.0;
        for w in distribution {
            let rel_freq = w / distribution_sum_of_weights;
            gini -= rel_freq * rel_freq;
        }
        gini
    }
}

impl SplitCriterion for GiniSplitCriterion {
    fn merit_of_split(
        &self,
        pre_split_distribution: &[f64],
        post_split_distributions: &[&[f64]],
    ) -> f64 {
        let total: f64 = pre_split_distribution.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        let mut weighted = 0.0;
        for dist in post_split_distributions {
            let w: f64 = dist.iter().sum();
            weighted += (w / total) * self.compute_gini(dist, w);
        }
        self.compute_gini(pre_split_distribution, total) - weighted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-12;

    #[test]
    fn gini_of_pure_and_balanced() {
        let g = GiniSplitCriterion::new();
        assert!(g.compute_gini(&[4.0, 0.0], 4.0).abs() < EPS);
        assert!((g.compute_gini(&[2.0, 2.0], 4.0) - 0.5).abs() < EPS);
        assert_eq!(g.compute_gini(&[0.0, 0.0], 0.0), 0.0);
    }

    #[test]
    fn perfect_split_recovers_full_impurity() {
        let g = GiniSplitCriterion::new();
        let merit = g.merit_of_split(&[2.0, 2.0], &[&[2.0, 0.0], &[0.0, 2.0]]);
        assert!((merit - 0.5).abs() < EPS);
    }

    #[test]
    fn useless_split_has_zero_merit() {
        let g = GiniSplitCriterion::new();
        let merit = g.merit_of_split(&[2.0, 2.0], &[&[1.0, 1.0], &[1.0, 1.0]]);
        assert!(merit.abs() < EPS);
    }
}
