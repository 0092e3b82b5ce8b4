use crate::classifiers::classifier::argmax;
use crate::evaluation::{Estimator, Measurement, PerformanceEvaluator};

/// Held-out classification evaluator.
///
/// Reports `accuracy`, the fraction of exact label matches, and `kappa`,
/// Cohen's κ against the chance agreement of the marginals.
///
/// Votes are reduced to a label with [`argmax`], so ties go to the lowest
/// class index.
pub struct ClassificationEvaluator<E: Estimator + Default> {
    weight_correct: E,
    confusion: Vec<Vec<f64>>,
    num_classes: usize,
}

impl<E: Estimator + Default> ClassificationEvaluator<E> {
    pub fn new(num_classes: usize) -> Self {
        Self {
            weight_correct: E::default(),
            confusion: vec![vec![0.0; num_classes]; num_classes],
            num_classes,
        }
    }

    pub fn seen(&self) -> u64 {
        self.weight_correct.count()
    }

    /// `confusion[true][predicted]` counts.
    pub fn confusion(&self) -> &[Vec<f64>] {
        &self.confusion
    }

    fn total(&self) -> f64 {
        self.confusion.iter().flatten().sum()
    }

    fn kappa(&self) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        let p_o = self.weight_correct.estimation();
        let mut p_e = 0.0;
        for c in 0..self.num_classes {
            let truth: f64 = self.confusion[c].iter().sum();
            let predicted: f64 = self.confusion.iter().map(|row| row[c]).sum();
            p_e += (truth / total) * (predicted / total);
        }
        let denom = 1.0 - p_e;
        if denom.abs() > f64::EPSILON {
            (p_o - p_e) / denom
        } else {
            f64::NAN
        }
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for ClassificationEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new(self.num_classes);
    }

    fn add_result(&mut self, true_class: usize, class_votes: &[f64]) {
        if true_class >= self.num_classes || class_votes.is_empty() {
            return;
        }
        let predicted = argmax(class_votes).min(self.num_classes - 1);

        self.weight_correct
            .add(if predicted == true_class { 1.0 } else { 0.0 });
        self.confusion[true_class][predicted] += 1.0;
    }

    fn performance(&self) -> Vec<Measurement> {
        vec![
            Measurement::new("accuracy", self.weight_correct.estimation()),
            Measurement::new("kappa", self.kappa()),
        ]
    }
}
