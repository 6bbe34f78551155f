use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("required feature '{0}' is missing from the input")]
    MissingFeature(String),
}
