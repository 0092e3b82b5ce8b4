mod error;
pub mod model_selection;
pub mod train_test_split;
mod trainer;

pub use error::TrainError;
pub use model_selection::{ScoredModel, fit_and_score, select};
pub use train_test_split::{Split, train_test_split};
pub use trainer::{Trainer, TrainingReport};
