use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Row indices of the two partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffles `0..n` with a seeded generator and holds out the first
/// `ceil(test_fraction * n)` indices.
pub fn train_test_split(n: usize, test_fraction: f64, seed: u64) -> Split {
    let n_test = ((test_fraction * n as f64).ceil() as usize).min(n);
    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let train = order.split_off(n_test);
    Split { train, test: order }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sizes_follow_ceiling_rule() {
        let s = train_test_split(10, 0.2, 42);
        assert_eq!((s.train.len(), s.test.len()), (8, 2));
        let s = train_test_split(11, 0.2, 42);
        assert_eq!((s.train.len(), s.test.len()), (8, 3));
        let s = train_test_split(1, 0.2, 42);
        assert_eq!((s.train.len(), s.test.len()), (0, 1));
        let s = train_test_split(0, 0.2, 42);
        assert!(s.train.is_empty() && s.test.is_empty());
    }

    #[test]
    fn partitions_are_disjoint_and_complete() {
        let s = train_test_split(57, 0.2, 42);
        let train: HashSet<_> = s.train.iter().copied().collect();
        let test: HashSet<_> = s.test.iter().copied().collect();
        assert!(train.is_disjoint(&test));
        assert_eq!(train.len() + test.len(), 57);
        assert!(train.union(&test).all(|&i| i < 57));
    }

    #[test]
    fn seed_makes_split_reproducible() {
        assert_eq!(train_test_split(40, 0.2, 42), train_test_split(40, 0.2, 42));
        assert_ne!(train_test_split(40, 0.2, 42), train_test_split(40, 0.2, 43));
    }
}
