mod dataset;
mod instance;

pub use dataset::{ColumnSummary, Dataset, Preview, Summary};
pub use instance::Instance;
