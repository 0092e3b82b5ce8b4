mod artifact;
mod error;

pub use artifact::{load_model, save_model};
pub use error::ArtifactError;
