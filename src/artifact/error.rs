use thiserror::Error;

use crate::core::encoding::EncodingError;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("unsupported artifact format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("artifact carries {vocabularies} vocabularies for {features} features")]
    VocabularyCountMismatch { vocabularies: usize, features: usize },

    #[error("positive class '{0}' is not one of the artifact's class labels")]
    UnknownPositiveClass(String),

    #[error("classifier parameters cover {params} features, artifact declares {declared}")]
    FeatureCountMismatch { params: usize, declared: usize },

    #[error("classifier parameters cover {params} classes, artifact declares {declared}")]
    ClassCountMismatch { params: usize, declared: usize },

    #[error("count table for feature {feature} has {found} classes, artifact declares {declared}")]
    CountTableClassMismatch {
        feature: usize,
        found: usize,
        declared: usize,
    },

    #[error("count table for feature {feature} covers {found} values, its vocabulary has {declared}")]
    CountTableArityMismatch {
        feature: usize,
        found: usize,
        declared: usize,
    },

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
