use crate::classifiers::{Classifier, LogisticRegression, RandomForest};
use crate::core::features::FeatureVector;
use crate::core::instances::Instance;
use serde::{Deserialize, Serialize};
use strum::EnumMessage;
use strum_macros::{Display, EnumDiscriminants, EnumMessage, EnumString, IntoStaticStr};

/// A candidate model as persisted on disk: the kind tag plus everything
/// needed to rebuild its decision function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ModelKind))]
#[strum_discriminants(derive(EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TrainedModel {
    #[strum_discriminants(strum(
        message = "Logistic Regression",
        detailed_message = "Linear decision boundary on standardized features."
    ))]
    LogisticRegression(LogisticRegression),

    #[strum_discriminants(strum(
        message = "Random Forest",
        detailed_message = "Bagged ensemble of Gini decision trees."
    ))]
    RandomForest(RandomForest),
}

impl TrainedModel {
    pub fn kind(&self) -> ModelKind {
        ModelKind::from(self)
    }

    /// Binary pass/fail prediction.
    pub fn predict(&self, features: &FeatureVector) -> u8 {
        if self.as_classifier().predict(features) == 1 { 1 } else { 0 }
    }

    pub fn as_classifier(&self) -> &dyn Classifier {
        match self {
            TrainedModel::LogisticRegression(m) => m as &dyn Classifier,
            TrainedModel::RandomForest(m) => m,
        }
    }

    /// Rejects models that could not have come out of training, such as an
    /// untrained forest or a tree whose child links point backwards.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            TrainedModel::LogisticRegression(m) => {
                let state = m.state.as_ref().ok_or("logistic regression is not fitted")?;
                let finite = state
                    .means
                    .iter()
                    .chain(&state.coefficients)
                    .chain([&state.intercept])
                    .all(|v| v.is_finite());
                if !finite || state.scales.iter().any(|s| !(s.is_finite() && *s > 0.0)) {
                    return Err("logistic regression has non-finite parameters".into());
                }
                Ok(())
            }
            TrainedModel::RandomForest(m) => m.validate(),
        }
    }
}

impl Classifier for TrainedModel {
    fn train_on_instances(&mut self, instances: &[Instance]) {
        match self {
            TrainedModel::LogisticRegression(m) => m.train_on_instances(instances),
            TrainedModel::RandomForest(m) => m.train_on_instances(instances),
        }
    }

    fn get_votes_for_instance(&self, features: &FeatureVector) -> Option<Vec<f64>> {
        self.as_classifier().get_votes_for_instance(features)
    }
}

impl ModelKind {
    /// Human readable name, e.g. `Random Forest`.
    pub fn label(&self) -> &'static str {
        self.get_message().unwrap_or_else(|| (*self).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::RandomForestParams;
    use crate::testing::dummies::separable_instances;
    use std::str::FromStr;

    fn trained_forest() -> TrainedModel {
        let mut m = TrainedModel::RandomForest(RandomForest::new(RandomForestParams {
            n_trees: 5,
            ..RandomForestParams::default()
        }));
        m.train_on_instances(&separable_instances(20));
        m
    }

    #[test]
    fn kind_names_and_labels() {
        assert_eq!(ModelKind::RandomForest.to_string(), "random-forest");
        assert_eq!(
            ModelKind::from_str("logistic-regression").unwrap(),
            ModelKind::LogisticRegression
        );
        assert_eq!(ModelKind::RandomForest.label(), "Random Forest");
        assert_eq!(trained_forest().kind(), ModelKind::RandomForest);
    }

    #[test]
    fn serialized_form_is_tagged_by_kind() {
        let v = serde_json::to_value(trained_forest()).unwrap();
        assert_eq!(v["type"], "random-forest");
        assert!(v["params"]["trees"].is_array());

        let mut lr = TrainedModel::LogisticRegression(LogisticRegression::default());
        lr.train_on_instances(&separable_instances(20));
        let v = serde_json::to_value(&lr).unwrap();
        assert_eq!(v["type"], "logistic-regression");
        assert!(v["params"]["state"]["coefficients"].is_array());
    }

    #[test]
    fn predictions_are_binary() {
        let m = trained_forest();
        for h in [0.0, 2.5, 5.0, 7.5, 12.0] {
            let p = m.predict(&FeatureVector::new(h, h * 10.0, h * 9.0));
            assert!(p == 0 || p == 1);
        }
    }

    #[test]
    fn validate_rejects_untrained_models() {
        assert!(
            TrainedModel::LogisticRegression(LogisticRegression::default())
                .validate()
                .is_err()
        );
        assert!(
            TrainedModel::RandomForest(RandomForest::default())
                .validate()
                .is_err()
        );
        assert!(trained_forest().validate().is_ok());
    }
}
