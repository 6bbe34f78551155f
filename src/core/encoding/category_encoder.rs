use std::collections::HashMap;

use crate::core::encoding::EncodingError;

/// Reserved code for values that were not part of the training vocabulary.
///
/// Real codes are always in `0..cardinality`, so the sentinel can never
/// collide with one.
pub const SENTINEL_CODE: i64 = -1;

/// Maps one feature's category strings to stable integer codes and back.
///
/// The vocabulary is fixed when the encoder is built and immutable
/// afterwards. Codes are assigned by lexicographic order of the distinct
/// values, so fitting the same set of values always yields the same
/// assignment, regardless of the order they were observed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEncoder {
    values: Vec<String>,
    code_by_value: HashMap<String, i64>,
}

impl CategoryEncoder {
    /// Builds the vocabulary from the distinct values in `values`.
    ///
    /// Returns [`EncodingError::EmptyVocabulary`] when the sequence yields
    /// no values at all.
    pub fn fit<I, S>(values: I) -> Result<CategoryEncoder, EncodingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut distinct: Vec<String> = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect();
        distinct.sort();
        distinct.dedup();

        if distinct.is_empty() {
            return Err(EncodingError::EmptyVocabulary);
        }
        Ok(Self::from_sorted(distinct))
    }

    /// Reconstructs an encoder from a vocabulary snapshot (e.g. one stored
    /// in a model artifact).
    ///
    /// The snapshot must be exactly what [`vocabulary`](Self::vocabulary)
    /// produced: non-empty, strictly sorted, duplicate-free. Anything else
    /// means the snapshot was edited or corrupted, and is rejected here
    /// rather than silently producing misaligned codes.
    pub fn from_vocabulary(values: Vec<String>) -> Result<CategoryEncoder, EncodingError> {
        if values.is_empty() {
            return Err(EncodingError::EmptyVocabulary);
        }
        for pair in values.windows(2) {
            if pair[0] >= pair[1] {
                return Err(EncodingError::UnsortedVocabulary(pair[1].clone()));
            }
        }
        Ok(Self::from_sorted(values))
    }

    fn from_sorted(values: Vec<String>) -> CategoryEncoder {
        let code_by_value = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i as i64))
            .collect();
        CategoryEncoder {
            values,
            code_by_value,
        }
    }

    /// Returns the value's code, or [`SENTINEL_CODE`] when the value was
    /// never seen during `fit`. Unseen input is an expected runtime
    /// condition, not an error.
    pub fn encode(&self, value: &str) -> i64 {
        self.code_by_value
            .get(value)
            .copied()
            .unwrap_or(SENTINEL_CODE)
    }

    /// Inverse lookup. Fails with [`EncodingError::UnknownCode`] for codes
    /// outside `0..cardinality`, including the sentinel.
    pub fn decode(&self, code: i64) -> Result<&str, EncodingError> {
        if code < 0 {
            return Err(EncodingError::UnknownCode(code));
        }
        self.values
            .get(code as usize)
            .map(String::as_str)
            .ok_or(EncodingError::UnknownCode(code))
    }

    /// The ordered vocabulary; index position equals code.
    pub fn vocabulary(&self) -> &[String] {
        &self.values
    }

    /// Number of distinct known values. Always at least 1.
    pub fn cardinality(&self) -> usize {
        self.values.len()
    }
}
