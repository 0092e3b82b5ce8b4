use crate::core::features::{CLASS_COLUMN, FEATURE_COLUMNS, NUM_FEATURES};
use crate::streams::DatasetError;

/// Schema of a tabular dataset: the raw column names plus the resolved
/// positions of the feature and class columns.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceHeader {
    pub relation_name: String,
    pub attributes: Vec<String>,
    feature_indices: [usize; NUM_FEATURES],
    class_index: usize,
}

impl InstanceHeader {
    /// Resolves [`FEATURE_COLUMNS`] and [`CLASS_COLUMN`] against `attributes`.
    ///
    /// Extra columns are allowed and ignored. The first missing required
    /// column is reported.
    pub fn from_columns(
        relation_name: String,
        attributes: Vec<String>,
    ) -> Result<InstanceHeader, DatasetError> {
        let lookup = |name: &str| {
            attributes
                .iter()
                .position(|a| a == name)
                .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
        };

        let mut feature_indices = [0usize; NUM_FEATURES];
        for (slot, name) in feature_indices.iter_mut().zip(FEATURE_COLUMNS) {
            *slot = lookup(name)?;
        }
        let class_index = lookup(CLASS_COLUMN)?;

        Ok(InstanceHeader {
            relation_name,
            attributes,
            feature_indices,
            class_index,
        })
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&str> {
        self.attributes.get(index).map(String::as_str)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a == name)
    }

    /// Raw column positions of the features, in training order.
    pub fn feature_indices(&self) -> &[usize; NUM_FEATURES] {
        &self.feature_indices
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }
}
