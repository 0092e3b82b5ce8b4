use crate::classifiers::split_criteria::SplitCriterion;
use crate::core::features::{FeatureVector, NUM_CLASSES, NUM_FEATURES};
use crate::core::instances::Instance;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Node of a tree stored in a flat arena. Children always have a larger
/// index than their parent, so index 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TreeNode {
    Leaf {
        distribution: [f64; NUM_CLASSES],
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// Stopping rules applied while growing a tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeGrowth {
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    /// Non-constant features evaluated per split.
    pub max_features: usize,
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    left: Vec<usize>,
    right: Vec<usize>,
}

/// CART classification tree on numeric features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Grows a tree on the rows of `instances` selected by `sample`
    /// (duplicates allowed, as produced by bootstrapping).
    pub fn fit<R: Rng + ?Sized>(
        instances: &[Instance],
        sample: Vec<usize>,
        growth: &TreeGrowth,
        criterion: &dyn SplitCriterion,
        rng: &mut R,
    ) -> Self {
        let mut nodes = vec![TreeNode::Leaf {
            distribution: [0.0; NUM_CLASSES],
        }];
        let mut work = vec![(0usize, sample, 0usize)];

        while let Some((id, rows, depth)) = work.pop() {
            let counts = class_counts(instances, &rows);
            let pure = counts.iter().filter(|&&c| c > 0.0).count() <= 1;
            let depth_reached = growth.max_depth.is_some_and(|d| depth >= d);

            let split = if pure || depth_reached || rows.len() < growth.min_samples_split {
                None
            } else {
                best_split(instances, &rows, &counts, growth.max_features, criterion, rng)
            };

            match split {
                Some(best) => {
                    let left = nodes.len();
                    let right = left + 1;
                    nodes.push(TreeNode::Leaf {
                        distribution: [0.0; NUM_CLASSES],
                    });
                    nodes.push(TreeNode::Leaf {
                        distribution: [0.0; NUM_CLASSES],
                    });
                    nodes[id] = TreeNode::Split {
                        feature: best.feature,
                        threshold: best.threshold,
                        left,
                        right,
                    };
                    work.push((right, best.right, depth + 1));
                    work.push((left, best.left, depth + 1));
                }
                None => {
                    nodes[id] = TreeNode::Leaf {
                        distribution: normalize(counts),
                    };
                }
            }
        }

        Self { nodes }
    }

    /// Class fractions at the leaf reached by `features`.
    pub fn class_distribution(&self, features: &FeatureVector) -> [f64; NUM_CLASSES] {
        let x = features.as_slice();
        let mut i = 0;
        loop {
            match &self.nodes[i] {
                TreeNode::Leaf { distribution } => return *distribution,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    i = if x[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(0usize, 0usize)];
        while let Some((i, d)) = stack.pop() {
            deepest = deepest.max(d);
            if let TreeNode::Split { left, right, .. } = self.nodes[i] {
                stack.push((left, d + 1));
                stack.push((right, d + 1));
            }
        }
        deepest
    }

    /// Checks arena invariants of a deserialized tree.
    pub fn validate(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".into());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = *node
            {
                if feature >= NUM_FEATURES {
                    return Err(format!("node {i}: feature index {feature} out of range"));
                }
                for child in [left, right] {
                    if child <= i || child >= self.nodes.len() {
                        return Err(format!("node {i}: invalid child index {child}"));
                    }
                }
            }
        }
        Ok(())
    }
}

fn class_counts(instances: &[Instance], rows: &[usize]) -> [f64; NUM_CLASSES] {
    let mut counts = [0.0; NUM_CLASSES];
    for &r in rows {
        counts[instances[r].class_value] += 1.0;
    }
    counts
}

fn normalize(counts: [f64; NUM_CLASSES]) -> [f64; NUM_CLASSES] {
    let total: f64 = counts.iter().sum();
    if total <= 0.0 {
        return counts;
    }
    counts.map(|c| c / total)
}

/// Searches features in random order until `max_features` non-constant ones
/// have been evaluated, keeping the split with the highest merit.
fn best_split<R: Rng + ?Sized>(
    instances: &[Instance],
    rows: &[usize],
    counts: &[f64; NUM_CLASSES],
    max_features: usize,
    criterion: &dyn SplitCriterion,
    rng: &mut R,
) -> Option<BestSplit> {
    let mut order: Vec<usize> = (0..NUM_FEATURES).collect();
    order.shuffle(rng);

    let mut best: Option<(usize, f64, f64)> = None;
    let mut evaluated = 0;

    for feature in order {
        if evaluated >= max_features {
            break;
        }
        let mut sorted: Vec<(f64, usize)> = rows
            .iter()
            .map(|&r| {
                let inst = &instances[r];
                (inst.features.as_slice()[feature], inst.class_value)
            })
            .collect();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (lo, hi) = (sorted[0].0, sorted[sorted.len() - 1].0);
        if lo == hi {
            continue;
        }
        evaluated += 1;

        let mut left = [0.0; NUM_CLASSES];
        for k in 0..sorted.len() - 1 {
            left[sorted[k].1] += 1.0;
            let (a, b) = (sorted[k].0, sorted[k + 1].0);
            if a == b {
                continue;
            }
            let mut right = [0.0; NUM_CLASSES];
            for c in 0..NUM_CLASSES {
                right[c] = counts[c] - left[c];
            }
            let merit = criterion.merit_of_split(counts, &[&left[..], &right[..]]);
            if best.is_none_or(|(_, _, m)| merit > m) {
                let mut threshold = a + (b - a) / 2.0;
                if threshold >= b {
                    threshold = a;
                }
                best = Some((feature, threshold, merit));
            }
        }
    }

    let (feature, threshold, _) = best?;
    let (left, right): (Vec<usize>, Vec<usize>) = rows
        .iter()
        .copied()
        .partition(|&r| instances[r].features.as_slice()[feature] <= threshold);
    Some(BestSplit {
        feature,
        threshold,
        left,
        right,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::split_criteria::GiniSplitCriterion;
    use crate::testing::dummies::separable_instances;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn full_growth() -> TreeGrowth {
        TreeGrowth {
            max_depth: None,
            min_samples_split: 2,
            max_features: NUM_FEATURES,
        }
    }

    fn fit_all(data: &[Instance], growth: &TreeGrowth, seed: u64) -> DecisionTree {
        let mut rng = StdRng::seed_from_u64(seed);
        DecisionTree::fit(
            data,
            (0..data.len()).collect(),
            growth,
            &GiniSplitCriterion::new(),
            &mut rng,
        )
    }

    #[test]
    fn fully_grown_tree_fits_training_data() {
        let data = separable_instances(40);
        let tree = fit_all(&data, &full_growth(), 7);
        for inst in &data {
            let d = tree.class_distribution(&inst.features);
            assert_eq!(d[inst.class_value], 1.0);
        }
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn pure_sample_is_a_single_leaf() {
        let data: Vec<Instance> = (0..5)
            .map(|i| Instance::new(FeatureVector::new(i as f64, 1.0, 2.0), 1))
            .collect();
        let tree = fit_all(&data, &full_growth(), 1);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(
            tree.class_distribution(&FeatureVector::new(99.0, 0.0, 0.0)),
            [0.0, 1.0]
        );
    }

    #[test]
    fn max_depth_limits_growth() {
        let data = separable_instances(40);
        let growth = TreeGrowth {
            max_depth: Some(1),
            ..full_growth()
        };
        let tree = fit_all(&data, &growth, 3);
        assert!(tree.depth() <= 1);
    }

    #[test]
    fn constant_features_yield_a_mixed_leaf() {
        let data = vec![
            Instance::new(FeatureVector::new(1.0, 1.0, 1.0), 0),
            Instance::new(FeatureVector::new(1.0, 1.0, 1.0), 1),
            Instance::new(FeatureVector::new(1.0, 1.0, 1.0), 1),
            Instance::new(FeatureVector::new(1.0, 1.0, 1.0), 0),
        ];
        let tree = fit_all(&data, &full_growth(), 5);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(
            tree.class_distribution(&FeatureVector::new(1.0, 1.0, 1.0)),
            [0.5, 0.5]
        );
    }

    #[test]
    fn threshold_is_midpoint_between_distinct_values() {
        let data = vec![
            Instance::new(FeatureVector::new(1.0, 0.0, 0.0), 0),
            Instance::new(FeatureVector::new(3.0, 0.0, 0.0), 1),
        ];
        let tree = fit_all(&data, &full_growth(), 0);
        assert_eq!(tree.class_distribution(&FeatureVector::new(1.99, 0.0, 0.0)), [1.0, 0.0]);
        assert_eq!(tree.class_distribution(&FeatureVector::new(2.01, 0.0, 0.0)), [0.0, 1.0]);
    }

    #[test]
    fn same_seed_grows_same_tree() {
        let data = separable_instances(30);
        let growth = TreeGrowth {
            max_features: 1,
            ..full_growth()
        };
        assert_eq!(fit_all(&data, &growth, 42), fit_all(&data, &growth, 42));
    }

    #[test]
    fn validate_rejects_bad_arena() {
        let tree = DecisionTree {
            nodes: vec![TreeNode::Split {
                feature: 0,
                threshold: 1.0,
                left: 0,
                right: 5,
            }],
        };
        assert!(tree.validate().is_err());

        let tree = DecisionTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 9,
                    threshold: 1.0,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf {
                    distribution: [1.0, 0.0],
                },
                TreeNode::Leaf {
                    distribution: [0.0, 1.0],
                },
            ],
        };
        assert!(tree.validate().is_err());
        assert!(DecisionTree { nodes: vec![] }.validate().is_err());
    }
}
