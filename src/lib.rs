pub mod classifiers;
pub mod config;
pub mod core;
pub mod evaluation;
pub mod persistence;
pub mod service;
pub mod streams;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
