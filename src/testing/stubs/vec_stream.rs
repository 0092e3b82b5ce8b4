use crate::core::features::FeatureVector;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::streams::{DatasetError, Stream};
use crate::testing::dummies::header_students;
use std::sync::Arc;

/// In-memory stream over fixed rows. With `fail_at`, the row at that
/// position is reported as malformed instead.
pub struct VecStream {
    pub header: Arc<InstanceHeader>,
    pub rows: Vec<([f64; 3], usize)>,
    pub fail_at: Option<usize>,
    idx: usize,
}

impl VecStream {
    pub fn new(rows: Vec<([f64; 3], usize)>) -> Self {
        Self {
            header: header_students(),
            rows,
            fail_at: None,
            idx: 0,
        }
    }

    pub fn failing_at(mut self, position: usize) -> Self {
        self.fail_at = Some(position);
        self
    }
}

impl Stream for VecStream {
    fn header(&self) -> &InstanceHeader {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.idx < self.rows.len()
    }

    fn next_instance(&mut self) -> Option<Result<Instance, DatasetError>> {
        if !self.has_more_instances() {
            return None;
        }
        let position = self.idx;
        self.idx += 1;

        if self.fail_at == Some(position) {
            return Some(Err(DatasetError::InvalidValue {
                line: position + 2,
                column: "Pass".into(),
                value: "maybe".into(),
            }));
        }
        let (x, y) = self.rows[position];
        Some(Ok(Instance::new(FeatureVector::from(x), y)))
    }

    fn restart(&mut self) -> Result<(), DatasetError> {
        self.idx = 0;
        Ok(())
    }
}
