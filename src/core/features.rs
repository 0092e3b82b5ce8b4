/// Dataset columns feeding the model, in the order every classifier expects.
///
/// The trainer resolves these names against the CSV header and the
/// prediction endpoint builds its vectors in the same order. Nothing checks
/// that an artifact was trained with this order; changing it silently
/// invalidates every previously persisted model.
pub const FEATURE_COLUMNS: [&str; NUM_FEATURES] = ["Hours_Studied", "Attendance", "Previous_Score"];

/// Binary pass/fail label column.
pub const CLASS_COLUMN: &str = "Pass";

pub const NUM_FEATURES: usize = 3;

/// Fail (0) and pass (1).
pub const NUM_CLASSES: usize = 2;

/// Ordered `(hours, attendance, previous_score)` triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; NUM_FEATURES]);

impl FeatureVector {
    pub fn new(hours: f64, attendance: f64, previous_score: f64) -> Self {
        Self([hours, attendance, previous_score])
    }

    #[inline]
    pub fn value_at_index(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn hours(&self) -> f64 {
        self.0[0]
    }

    pub fn attendance(&self) -> f64 {
        self.0[1]
    }

    pub fn previous_score(&self) -> f64 {
        self.0[2]
    }
}

impl From<[f64; NUM_FEATURES]> for FeatureVector {
    fn from(values: [f64; NUM_FEATURES]) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_training_column_order() {
        let v = FeatureVector::new(10.0, 95.0, 88.0);
        assert_eq!(v.as_slice(), &[10.0, 95.0, 88.0]);
        assert_eq!(v.hours(), 10.0);
        assert_eq!(v.attendance(), 95.0);
        assert_eq!(v.previous_score(), 88.0);
        assert_eq!(v.value_at_index(3), None);
    }

    #[test]
    fn column_names_are_stable() {
        assert_eq!(
            FEATURE_COLUMNS,
            ["Hours_Studied", "Attendance", "Previous_Score"]
        );
        assert_eq!(CLASS_COLUMN, "Pass");
    }
}
