use crate::classifiers::Classifier;
use crate::core::features::{FeatureVector, NUM_FEATURES};
use crate::core::instances::Instance;
use crate::utils::math::sigmoid;
use serde::{Deserialize, Serialize};

fn default_c() -> f64 {
    1.0
}

fn default_learning_rate() -> f64 {
    0.1
}

fn default_max_iterations() -> usize {
    1000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegressionParams {
    /// Inverse L2 regularization strength.
    #[serde(default = "default_c")]
    pub c: f64,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for LogisticRegressionParams {
    fn default() -> Self {
        Self {
            c: default_c(),
            learning_rate: default_learning_rate(),
            max_iterations: default_max_iterations(),
        }
    }
}

/// Fitted parameters. Coefficients apply to standardized features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticState {
    pub means: [f64; NUM_FEATURES],
    pub scales: [f64; NUM_FEATURES],
    pub coefficients: [f64; NUM_FEATURES],
    pub intercept: f64,
}

impl LogisticState {
    fn decision(&self, features: &FeatureVector) -> f64 {
        let x = features.as_slice();
        let mut z = self.intercept;
        for j in 0..NUM_FEATURES {
            z += self.coefficients[j] * (x[j] - self.means[j]) / self.scales[j];
        }
        z
    }
}

/// Binary logistic regression fitted by full-batch gradient descent on the
/// L2-regularized log-loss. The intercept is not regularized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub params: LogisticRegressionParams,
    pub state: Option<LogisticState>,
}

impl LogisticRegression {
    pub fn new(params: LogisticRegressionParams) -> Self {
        Self {
            params,
            state: None,
        }
    }

    /// Probability of class 1, or `None` before training.
    pub fn probability(&self, features: &FeatureVector) -> Option<f64> {
        self.state.as_ref().map(|s| sigmoid(s.decision(features)))
    }

    fn standardize(instances: &[Instance]) -> ([f64; NUM_FEATURES], [f64; NUM_FEATURES]) {
        let n = instances.len() as f64;
        let mut means = [0.0; NUM_FEATURES];
        let mut scales = [1.0; NUM_FEATURES];
        for j in 0..NUM_FEATURES {
            let m = instances
                .iter()
                .map(|inst| inst.features.as_slice()[j])
                .sum::<f64>()
                / n;
            let var = instances
                .iter()
                .map(|inst| (inst.features.as_slice()[j] - m).powi(2))
                .sum::<f64>()
                / n;
            means[j] = m;
            let sd = var.sqrt();
            if sd > f64::EPSILON {
                scales[j] = sd;
            }
        }
        (means, scales)
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(LogisticRegressionParams::default())
    }
}

impl Classifier for LogisticRegression {
    fn train_on_instances(&mut self, instances: &[Instance]) {
        if instances.is_empty() {
            self.state = None;
            return;
        }

        let (means, scales) = Self::standardize(instances);
        let rows: Vec<([f64; NUM_FEATURES], f64)> = instances
            .iter()
            .map(|inst| {
                let x = inst.features.as_slice();
                let mut z = [0.0; NUM_FEATURES];
                for j in 0..NUM_FEATURES {
                    z[j] = (x[j] - means[j]) / scales[j];
                }
                (z, inst.class_value as f64)
            })
            .collect();

        let n = rows.len() as f64;
        let penalty = 1.0 / (self.params.c * n);
        let lr = self.params.learning_rate;
        let mut w = [0.0; NUM_FEATURES];
        let mut b = 0.0;

        for _ in 0..self.params.max_iterations {
            let mut grad_w = [0.0; NUM_FEATURES];
            let mut grad_b = 0.0;
            for (x, y) in &rows {
                let mut z = b;
                for j in 0..NUM_FEATURES {
                    z += w[j] * x[j];
                }
                let err = sigmoid(z) - y;
                for j in 0..NUM_FEATURES {
                    grad_w[j] += err * x[j];
                }
                grad_b += err;
            }
            for j in 0..NUM_FEATURES {
                w[j] -= lr * (grad_w[j] / n + penalty * w[j]);
            }
            b -= lr * grad_b / n;
        }

        self.state = Some(LogisticState {
            means,
            scales,
            coefficients: w,
            intercept: b,
        });
    }

    fn get_votes_for_instance(&self, features: &FeatureVector) -> Option<Vec<f64>> {
        let p = self.probability(features)?;
        Some(vec![1.0 - p, p])
    }
}
