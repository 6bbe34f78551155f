use std::collections::HashMap;

use crate::core::encoding::CategoryEncoder;
use crate::core::features::{FeatureVector, PredictError};

/// Ordered list of `(feature name, encoder)` pairs fixed at training time.
///
/// The pair order defines the layout of every [`FeatureVector`] this set
/// assembles; it must match the order the classifier was trained with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSet {
    columns: Vec<(String, CategoryEncoder)>,
}

impl FeatureSet {
    pub fn new(columns: Vec<(String, CategoryEncoder)>) -> FeatureSet {
        FeatureSet { columns }
    }

    pub fn columns(&self) -> &[(String, CategoryEncoder)] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn encoder(&self, name: &str) -> Option<&CategoryEncoder> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, enc)| enc)
    }

    /// Encodes `raw` into a vector following this set's fixed order.
    ///
    /// A missing feature name fails the whole assembly with
    /// [`PredictError::MissingFeature`]; an unseen value degrades that
    /// position to the sentinel instead of failing, so the caller can still
    /// obtain a (flagged) prediction.
    pub fn assemble(&self, raw: &HashMap<String, String>) -> Result<FeatureVector, PredictError> {
        let mut codes = Vec::with_capacity(self.columns.len());
        for (name, encoder) in &self.columns {
            let value = raw
                .get(name)
                .ok_or_else(|| PredictError::MissingFeature(name.clone()))?;
            codes.push(encoder.encode(value));
        }
        Ok(FeatureVector::new(codes))
    }
}
