mod error;
mod feature_set;
mod feature_vector;

pub use error::PredictError;
pub use feature_set::FeatureSet;
pub use feature_vector::FeatureVector;
