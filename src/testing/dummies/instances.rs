use crate::core::features::{CLASS_COLUMN, FEATURE_COLUMNS, FeatureVector};
use crate::core::instances::{Dataset, Instance};
use crate::testing::dummies::header_students;
use std::fmt::Write as _;
use std::path::Path;

/// Rows alternating fail (even) and pass (odd), with the two classes far
/// apart on every feature.
pub fn separable_rows(n: usize) -> Vec<([f64; 3], usize)> {
    (0..n)
        .map(|i| {
            let (a, b, c) = ((i % 5) as f64, (i % 7) as f64, (i % 9) as f64);
            if i % 2 == 0 {
                ([0.5 + a * 0.5, 30.0 + b * 4.0, 20.0 + c * 3.0], 0)
            } else {
                ([6.0 + a * 0.8, 75.0 + b * 3.0, 65.0 + c * 3.0], 1)
            }
        })
        .collect()
}

pub fn separable_instances(n: usize) -> Vec<Instance> {
    to_instances(&separable_rows(n))
}

/// Spread-out feature values, every row labeled pass.
pub fn all_pass_instances(n: usize) -> Vec<Instance> {
    (0..n)
        .map(|i| {
            let x = FeatureVector::new(
                (i % 11) as f64,
                40.0 + (i % 13) as f64 * 4.0,
                30.0 + (i % 17) as f64 * 3.5,
            );
            Instance::new(x, 1)
        })
        .collect()
}

pub fn dataset_from_rows(rows: &[([f64; 3], usize)]) -> Dataset {
    Dataset::new(header_students(), to_instances(rows))
}

/// Writes `rows` as a CSV with the canonical header.
pub fn write_students_csv(path: &Path, rows: &[([f64; 3], usize)]) {
    let mut text = FEATURE_COLUMNS.join(",");
    let _ = writeln!(text, ",{CLASS_COLUMN}");
    for (x, y) in rows {
        let _ = writeln!(text, "{},{},{},{y}", x[0], x[1], x[2]);
    }
    std::fs::write(path, text).unwrap();
}

fn to_instances(rows: &[([f64; 3], usize)]) -> Vec<Instance> {
    rows.iter()
        .map(|&(x, y)| Instance::new(FeatureVector::from(x), y))
        .collect()
}
