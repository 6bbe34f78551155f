mod error;
mod trainer;

pub use error::TrainingError;
pub use trainer::{LearnerKind, Trainer, TrainingConfig};
