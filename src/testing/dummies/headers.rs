use crate::core::features::{CLASS_COLUMN, FEATURE_COLUMNS};
use crate::core::instance_header::InstanceHeader;
use std::sync::Arc;

/// Header of the canonical `Hours_Studied,Attendance,Previous_Score,Pass` layout.
pub fn header_students() -> Arc<InstanceHeader> {
    let attributes = FEATURE_COLUMNS
        .iter()
        .chain([&CLASS_COLUMN])
        .map(|s| s.to_string())
        .collect();
    match InstanceHeader::from_columns("students".into(), attributes) {
        Ok(h) => Arc::new(h),
        Err(e) => panic!("canonical header must resolve: {e}"),
    }
}
