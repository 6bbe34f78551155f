use thiserror::Error;

use crate::core::encoding::EncodingError;

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("training stream produced no rows")]
    EmptyDataset,

    #[error("row {row} has {found} feature values, header declares {expected}")]
    RowShapeMismatch {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("positive class '{0}' never occurs in the training data")]
    UnknownPositiveClass(String),

    #[error("logistic regression is binary, but the data has {0} classes")]
    BinaryLearnerOnMulticlass(usize),

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
