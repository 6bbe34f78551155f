use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("cannot fit an encoder on an empty value sequence")]
    EmptyVocabulary,

    #[error("code {0} does not correspond to any known category")]
    UnknownCode(i64),

    #[error("vocabulary snapshot is not strictly sorted at '{0}'")]
    UnsortedVocabulary(String),
}
