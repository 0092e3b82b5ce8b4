use crate::classifiers::Classifier;
use crate::classifiers::random_forest::{DecisionTree, TreeGrowth};
use crate::classifiers::split_criteria::GiniSplitCriterion;
use crate::core::features::{FeatureVector, NUM_CLASSES, NUM_FEATURES};
use crate::core::instances::Instance;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const DEFAULT_SEED: u64 = 42;

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_n_trees() -> usize {
    100
}

fn default_min_samples_split() -> usize {
    2
}

fn default_bootstrap() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForestParams {
    #[serde(default = "default_n_trees")]
    pub n_trees: usize,
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,
    /// Features considered per split; `None` means `floor(sqrt(d))`.
    #[serde(default)]
    pub max_features: Option<usize>,
    #[serde(default = "default_bootstrap")]
    pub bootstrap: bool,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for RandomForestParams {
    fn default() -> Self {
        Self {
            n_trees: default_n_trees(),
            max_depth: None,
            min_samples_split: default_min_samples_split(),
            max_features: None,
            bootstrap: default_bootstrap(),
            seed: default_seed(),
        }
    }
}

impl RandomForestParams {
    fn growth(&self) -> TreeGrowth {
        let sqrt_d = (NUM_FEATURES as f64).sqrt().floor() as usize;
        TreeGrowth {
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split.max(2),
            max_features: self.max_features.unwrap_or(sqrt_d).clamp(1, NUM_FEATURES),
        }
    }
}

/// Bagged ensemble of Gini trees. Class votes are the mean of the leaf
/// class distributions across trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    pub params: RandomForestParams,
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn new(params: RandomForestParams) -> Self {
        Self {
            params,
            trees: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("forest has no trees".into());
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate().map_err(|e| format!("tree {i}: {e}"))?;
        }
        Ok(())
    }
}

impl Default for RandomForest {
    fn default() -> Self {
        Self::new(RandomForestParams::default())
    }
}

impl Classifier for RandomForest {
    fn train_on_instances(&mut self, instances: &[Instance]) {
        self.trees.clear();
        if instances.is_empty() {
            return;
        }

        let growth = self.params.growth();
        let criterion = GiniSplitCriterion::new();
        let mut rng = StdRng::seed_from_u64(self.params.seed);
        let n = instances.len();

        self.trees = (0..self.params.n_trees)
            .map(|_| {
                let sample: Vec<usize> = if self.params.bootstrap {
                    (0..n).map(|_| rng.random_range(0..n)).collect()
                } else {
                    (0..n).collect()
                };
                DecisionTree::fit(instances, sample, &growth, &criterion, &mut rng)
            })
            .collect();
    }

    fn get_votes_for_instance(&self, features: &FeatureVector) -> Option<Vec<f64>> {
        if self.trees.is_empty() {
            return None;
        }
        let mut votes = vec![0.0; NUM_CLASSES];
        for tree in &self.trees {
            for (v, p) in votes.iter_mut().zip(tree.class_distribution(features)) {
                *v += p;
            }
        }
        let k = self.trees.len() as f64;
        votes.iter_mut().for_each(|v| *v /= k);
        Some(votes)
    }
}
