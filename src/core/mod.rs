pub mod features;
pub mod instance_header;
pub mod instances;

pub use features::FeatureVector;
