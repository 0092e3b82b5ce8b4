use crate::classifiers::{Classifier, ModelKind, TrainedModel};
use crate::core::features::NUM_CLASSES;
use crate::core::instances::Instance;
use crate::evaluation::{ClassificationEvaluator, MeanEstimator, PerformanceEvaluator};

/// A fitted candidate together with its held-out scores.
#[derive(Debug, Clone)]
pub struct ScoredModel {
    pub model: TrainedModel,
    pub accuracy: f64,
    pub kappa: f64,
}

impl ScoredModel {
    pub fn kind(&self) -> ModelKind {
        self.model.kind()
    }
}

/// Fits `model` on `train` and scores it on `test`.
pub fn fit_and_score(
    mut model: TrainedModel,
    train: &[Instance],
    test: &[Instance],
) -> ScoredModel {
    model.train_on_instances(train);

    let mut evaluator = ClassificationEvaluator::<MeanEstimator>::new(NUM_CLASSES);
    for instance in test {
        if let Some(votes) = model.get_votes_for_instance(&instance.features) {
            evaluator.add_result(instance.class_value(), &votes);
        }
    }

    ScoredModel {
        accuracy: evaluator.metric("accuracy").unwrap_or(f64::NAN),
        kappa: evaluator.metric("kappa").unwrap_or(f64::NAN),
        model,
    }
}

/// The forest wins whenever its accuracy is at least the logistic one.
pub fn prefer_forest(forest_accuracy: f64, logistic_accuracy: f64) -> bool {
    forest_accuracy >= logistic_accuracy
}

/// Picks between the two scored candidates.
pub fn select(logistic: ScoredModel, forest: ScoredModel) -> ScoredModel {
    if prefer_forest(forest.accuracy, logistic.accuracy) {
        forest
    } else {
        logistic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::{LogisticRegression, RandomForest, RandomForestParams};
    use crate::testing::dummies::{all_pass_instances, separable_instances};

    fn small_forest() -> TrainedModel {
        TrainedModel::RandomForest(RandomForest::new(RandomForestParams {
            n_trees: 10,
            ..RandomForestParams::default()
        }))
    }

    #[test]
    fn ties_go_to_the_forest() {
        assert!(prefer_forest(0.9, 0.9));
        assert!(prefer_forest(0.95, 0.9));
        assert!(!prefer_forest(0.85, 0.9));
    }

    #[test]
    fn separable_data_is_scored_perfectly() {
        let data = separable_instances(60);
        let (train, test) = data.split_at(48);
        let scored = fit_and_score(small_forest(), train, test);
        assert_eq!(scored.accuracy, 1.0);
        assert_eq!(scored.kind(), ModelKind::RandomForest);

        let scored = fit_and_score(
            TrainedModel::LogisticRegression(LogisticRegression::default()),
            train,
            test,
        );
        assert_eq!(scored.accuracy, 1.0);
    }

    #[test]
    fn select_prefers_forest_on_equal_accuracy() {
        let data = all_pass_instances(30);
        let (train, test) = data.split_at(24);
        let lr = fit_and_score(
            TrainedModel::LogisticRegression(LogisticRegression::default()),
            train,
            test,
        );
        let rf = fit_and_score(small_forest(), train, test);
        assert_eq!(lr.accuracy, rf.accuracy);
        assert_eq!(select(lr, rf).kind(), ModelKind::RandomForest);
    }

    #[test]
    fn select_keeps_the_more_accurate_logistic_model() {
        let data = separable_instances(20);
        let mut lr = fit_and_score(
            TrainedModel::LogisticRegression(LogisticRegression::default()),
            &data,
            &data,
        );
        let mut rf = fit_and_score(small_forest(), &data, &data);
        lr.accuracy = 1.0;
        rf.accuracy = 0.5;
        assert_eq!(select(lr, rf).kind(), ModelKind::LogisticRegression);
    }
}
