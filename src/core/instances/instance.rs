use crate::core::features::FeatureVector;

/// One labeled dataset row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instance {
    pub features: FeatureVector,
    pub class_value: usize,
}

impl Instance {
    pub fn new(features: FeatureVector, class_value: usize) -> Instance {
        Instance {
            features,
            class_value,
        }
    }

    #[inline]
    pub fn value_at_index(&self, index: usize) -> Option<f64> {
        self.features.value_at_index(index)
    }

    #[inline]
    pub fn class_value(&self) -> usize {
        self.class_value
    }
}
