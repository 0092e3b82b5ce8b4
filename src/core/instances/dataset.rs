use crate::core::features::{CLASS_COLUMN, FEATURE_COLUMNS, NUM_FEATURES};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::streams::{DatasetError, Stream};
use crate::utils::math::{mean, quantile, sample_std};
use std::fmt::{Display, Formatter, Result};
use std::sync::Arc;

/// Fully materialized labeled dataset. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    instances: Vec<Instance>,
}

impl Dataset {
    pub fn new(header: Arc<InstanceHeader>, instances: Vec<Instance>) -> Self {
        Self { header, instances }
    }

    /// Drains `stream` into memory, stopping at the first malformed record.
    pub fn from_stream(stream: &mut dyn Stream) -> std::result::Result<Self, DatasetError> {
        let header = Arc::new(stream.header().clone());
        let mut instances = Vec::new();
        while stream.has_more_instances() {
            match stream.next_instance() {
                Some(row) => instances.push(row?),
                None => break,
            }
        }
        Ok(Self { header, instances })
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Rows at `indices`, in the given order.
    pub fn select(&self, indices: &[usize]) -> Vec<Instance> {
        indices.iter().map(|&i| self.instances[i]).collect()
    }

    /// First `rows` instances, for display.
    pub fn preview(&self, rows: usize) -> Preview<'_> {
        let end = rows.min(self.instances.len());
        Preview {
            rows: &self.instances[..end],
        }
    }

    /// Count, mean, std, min, quartiles and max per feature and for the label.
    pub fn describe(&self) -> Summary {
        let mut columns = Vec::with_capacity(NUM_FEATURES + 1);
        for (i, name) in FEATURE_COLUMNS.iter().enumerate() {
            let values: Vec<f64> = self
                .instances
                .iter()
                .filter_map(|inst| inst.value_at_index(i))
                .collect();
            columns.push(ColumnSummary::from_values(name, values));
        }
        let labels: Vec<f64> = self
            .instances
            .iter()
            .map(|inst| inst.class_value() as f64)
            .collect();
        columns.push(ColumnSummary::from_values(CLASS_COLUMN, labels));
        Summary { columns }
    }
}

pub struct Preview<'a> {
    rows: &'a [Instance],
}

impl Display for Preview<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:>5}", "")?;
        for name in FEATURE_COLUMNS.iter().chain([&CLASS_COLUMN]) {
            write!(f, " {name:>15}")?;
        }
        writeln!(f)?;
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "{i:>5}")?;
            for v in row.features.as_slice() {
                write!(f, " {v:>15}")?;
            }
            writeln!(f, " {:>15}", row.class_value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

impl ColumnSummary {
    fn from_values(name: &str, mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);
        Self {
            name: name.to_string(),
            count: values.len(),
            mean: mean(&values),
            std: sample_std(&values),
            min: values.first().copied().unwrap_or(f64::NAN),
            p25: quantile(&values, 0.25),
            p50: quantile(&values, 0.5),
            p75: quantile(&values, 0.75),
            max: values.last().copied().unwrap_or(f64::NAN),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub columns: Vec<ColumnSummary>,
}

impl Summary {
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:>5}", "")?;
        for c in &self.columns {
            write!(f, " {:>15}", c.name)?;
        }
        writeln!(f)?;

        let stats: [(&str, fn(&ColumnSummary) -> f64); 8] = [
            ("count", |c| c.count as f64),
            ("mean", |c| c.mean),
            ("std", |c| c.std),
            ("min", |c| c.min),
            ("25%", |c| c.p25),
            ("50%", |c| c.p50),
            ("75%", |c| c.p75),
            ("max", |c| c.max),
        ];
        for (label, get) in stats {
            write!(f, "{label:>5}")?;
            for c in &self.columns {
                write!(f, " {:>15.6}", get(c))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::VecStream;
    use crate::testing::dummies::{dataset_from_rows, header_students};

    fn sample() -> Dataset {
        dataset_from_rows(&[
            ([1.0, 60.0, 40.0], 0),
            ([2.0, 70.0, 50.0], 0),
            ([3.0, 80.0, 60.0], 1),
            ([4.0, 90.0, 70.0], 1),
        ])
    }

    #[test]
    fn describe_matches_hand_computed_values() {
        let s = sample().describe();
        assert_eq!(s.columns.len(), 4);

        let hours = s.column("Hours_Studied").unwrap();
        assert_eq!(hours.count, 4);
        assert!((hours.mean - 2.5).abs() < 1e-12);
        assert!((hours.std - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(hours.min, 1.0);
        assert!((hours.p25 - 1.75).abs() < 1e-12);
        assert!((hours.p50 - 2.5).abs() < 1e-12);
        assert!((hours.p75 - 3.25).abs() < 1e-12);
        assert_eq!(hours.max, 4.0);

        let pass = s.column("Pass").unwrap();
        assert!((pass.mean - 0.5).abs() < 1e-12);
    }

    #[test]
    fn describe_of_empty_dataset_is_nan() {
        let d = Dataset::new(header_students(), Vec::new());
        let s = d.describe();
        let hours = s.column("Hours_Studied").unwrap();
        assert_eq!(hours.count, 0);
        assert!(hours.mean.is_nan());
        assert!(hours.min.is_nan());
    }

    #[test]
    fn preview_is_bounded_by_len() {
        let d = sample();
        let text = d.preview(10).to_string();
        assert_eq!(text.lines().count(), 5);
        let text = d.preview(2).to_string();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().next().unwrap().contains("Hours_Studied"));
    }

    #[test]
    fn select_preserves_requested_order() {
        let d = sample();
        let rows = d.select(&[3, 0]);
        assert_eq!(rows[0].features.hours(), 4.0);
        assert_eq!(rows[1].features.hours(), 1.0);
    }

    #[test]
    fn from_stream_drains_all_rows() {
        let mut stream = VecStream::new(vec![([1.0, 2.0, 3.0], 0), ([4.0, 5.0, 6.0], 1)]);
        let d = Dataset::from_stream(&mut stream).unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d.instances()[1].class_value(), 1);
        assert_eq!(d.header().relation_name(), "students");
    }

    #[test]
    fn from_stream_stops_at_first_malformed_row() {
        let rows = vec![([1.0, 2.0, 3.0], 0); 4];
        let mut stream = VecStream::new(rows).failing_at(2);
        let err = Dataset::from_stream(&mut stream).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidValue { line: 4, .. }));
    }
}
