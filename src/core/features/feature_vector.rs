use crate::core::encoding::SENTINEL_CODE;

/// Fixed-length, fixed-order sequence of feature codes.
///
/// The length and ordering are established by the [`FeatureSet`] that
/// assembled the vector and never change afterwards.
///
/// [`FeatureSet`]: crate::core::features::FeatureSet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    codes: Vec<i64>,
}

impl FeatureVector {
    pub fn new(codes: Vec<i64>) -> FeatureVector {
        FeatureVector { codes }
    }

    pub fn codes(&self) -> &[i64] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// True when at least one feature carries the unseen-value sentinel.
    pub fn is_degraded(&self) -> bool {
        self.codes.contains(&SENTINEL_CODE)
    }

    /// Numeric view consumed by classifiers. The sentinel maps to -1.0.
    pub fn to_f64(&self) -> Vec<f64> {
        self.codes.iter().map(|&c| c as f64).collect()
    }
}
