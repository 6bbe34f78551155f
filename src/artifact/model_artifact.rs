use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::artifact::ArtifactError;
use crate::classifiers::ClassifierParams;
use crate::core::encoding::CategoryEncoder;
use crate::core::features::FeatureSet;

/// Current serialization format. Bumped whenever the layout of the bundle
/// changes; loaders reject any other value instead of guessing.
pub const FORMAT_VERSION: u32 = 1;

/// Serialized training output: the exact vocabulary snapshot and feature
/// order used at fit time, the class-label mapping, and the learned
/// classifier parameters.
///
/// An artifact is produced once by the offline training step and loaded
/// read-only by inference. It is never mutated in place; retraining writes
/// a new file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub created_at: DateTime<Utc>,
    pub relation_name: String,
    /// Fixed feature order shared between training and inference.
    pub feature_names: Vec<String>,
    /// One sorted vocabulary per feature, aligned with `feature_names`.
    pub vocabularies: Vec<Vec<String>>,
    /// Sorted class-label vocabulary; index position equals class code.
    pub class_labels: Vec<String>,
    /// Which label means "risk present". Stored by name so the 0/1 code
    /// assignment never has to be guessed by consumers.
    pub positive_class: String,
    pub classifier: ClassifierParams,
}

impl ModelArtifact {
    /// Writes the bundle as pretty-printed JSON. The file is created fresh;
    /// an existing artifact at `path` is replaced whole, never patched.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ArtifactError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads and validates a bundle. Any structural inconsistency fails the
    /// load here, before an encoder or classifier is ever built from it.
    pub fn load(path: impl AsRef<Path>) -> Result<ModelArtifact, ArtifactError> {
        let reader = BufReader::new(File::open(path)?);
        let artifact: ModelArtifact = serde_json::from_reader(reader)?;
        artifact.validate()?;
        Ok(artifact)
    }

    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.format_version != FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                found: self.format_version,
                expected: FORMAT_VERSION,
            });
        }
        if self.vocabularies.len() != self.feature_names.len() {
            return Err(ArtifactError::VocabularyCountMismatch {
                vocabularies: self.vocabularies.len(),
                features: self.feature_names.len(),
            });
        }
        // Class codes are assigned by sorted order at training time, so a
        // reordered or duplicated label snapshot would silently mislabel
        // every prediction.
        self.class_encoder()?;
        if !self.class_labels.contains(&self.positive_class) {
            return Err(ArtifactError::UnknownPositiveClass(
                self.positive_class.clone(),
            ));
        }
        if self.classifier.num_features() != self.feature_names.len() {
            return Err(ArtifactError::FeatureCountMismatch {
                params: self.classifier.num_features(),
                declared: self.feature_names.len(),
            });
        }
        if self.classifier.num_classes() != self.class_labels.len() {
            return Err(ArtifactError::ClassCountMismatch {
                params: self.classifier.num_classes(),
                declared: self.class_labels.len(),
            });
        }
        // The outer dimension checks above guarantee one count table per
        // feature; the tables themselves must also match the declared
        // classes and vocabularies, or inference would index out of bounds
        // (or quietly treat valid codes as unseen).
        if let ClassifierParams::CategoricalNaiveBayes { value_counts, .. } = &self.classifier {
            for (feature, per_class) in value_counts.iter().enumerate() {
                if per_class.len() != self.class_labels.len() {
                    return Err(ArtifactError::CountTableClassMismatch {
                        feature,
                        found: per_class.len(),
                        declared: self.class_labels.len(),
                    });
                }
                let arity = self.vocabularies[feature].len();
                for counts in per_class {
                    if counts.len() != arity {
                        return Err(ArtifactError::CountTableArityMismatch {
                            feature,
                            found: counts.len(),
                            declared: arity,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Rebuilds the feature encoders from the stored vocabulary snapshots,
    /// in the stored feature order.
    pub fn feature_set(&self) -> Result<FeatureSet, ArtifactError> {
        let mut columns = Vec::with_capacity(self.feature_names.len());
        for (name, vocabulary) in self.feature_names.iter().zip(&self.vocabularies) {
            let encoder = CategoryEncoder::from_vocabulary(vocabulary.clone())?;
            columns.push((name.clone(), encoder));
        }
        Ok(FeatureSet::new(columns))
    }

    /// Rebuilds the class-label encoder.
    pub fn class_encoder(&self) -> Result<CategoryEncoder, ArtifactError> {
        Ok(CategoryEncoder::from_vocabulary(self.class_labels.clone())?)
    }
}
