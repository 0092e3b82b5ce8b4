mod headers;
mod instances;

pub use headers::header_students;
pub use instances::{
    all_pass_instances, dataset_from_rows, separable_instances, separable_rows,
    write_students_csv,
};
