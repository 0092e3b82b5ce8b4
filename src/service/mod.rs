mod error;
pub mod http;
mod predictor;

pub use error::PredictError;
pub use http::{configure, cors, run};
pub use predictor::{PredictRequest, PredictResponse, PredictorService};
