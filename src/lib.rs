pub mod artifact;
pub mod classifiers;
pub mod core;
pub mod evaluation;
pub mod service;
pub mod streams;
pub mod training;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
