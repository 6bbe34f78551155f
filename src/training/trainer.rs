use chrono::Utc;
use strum_macros::{Display, EnumIter};

use crate::artifact::{FORMAT_VERSION, ModelArtifact};
use crate::classifiers::{
    CategoricalNaiveBayes, ClassifierParams, DEFAULT_SMOOTHING, LogisticRegression, RiskClassifier,
};
use crate::core::encoding::{CategoryEncoder, SENTINEL_CODE};
use crate::core::features::{FeatureSet, FeatureVector};
use crate::streams::RowStream;
use crate::training::TrainingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum LearnerKind {
    #[strum(serialize = "Logistic regression")]
    LogisticRegression,
    #[strum(serialize = "Naive Bayes")]
    NaiveBayes,
}

/// Offline training configuration.
///
/// The positive class is named explicitly here and stored in the artifact:
/// which integer code means "accident" is never inferred from code order.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    pub learner: LearnerKind,
    pub positive_class: String,
    pub smoothing: f64,
}

impl TrainingConfig {
    pub fn new(learner: LearnerKind, positive_class: impl Into<String>) -> TrainingConfig {
        TrainingConfig {
            learner,
            positive_class: positive_class.into(),
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

/// Offline batch step: drains a labeled row stream and produces a
/// versioned [`ModelArtifact`].
///
/// Vocabularies are fit column-wise over the full dataset (sorted,
/// distinct), so training twice on row-permuted copies of the same data
/// yields identical code assignments and identical parameters.
pub struct Trainer {
    config: TrainingConfig,
}

impl Trainer {
    pub fn new(config: TrainingConfig) -> Trainer {
        Trainer { config }
    }

    pub fn fit(&self, stream: &mut dyn RowStream) -> Result<ModelArtifact, TrainingError> {
        let header = stream.header().clone();
        let expected = header.number_of_features();

        let mut rows = Vec::new();
        while let Some(row) = stream.next_row() {
            if row.features.len() != expected {
                return Err(TrainingError::RowShapeMismatch {
                    row: rows.len(),
                    found: row.features.len(),
                    expected,
                });
            }
            rows.push(row);
        }
        if rows.is_empty() {
            return Err(TrainingError::EmptyDataset);
        }

        // One encoder per feature column, plus one for the class column.
        let mut columns = Vec::with_capacity(expected);
        for (i, name) in header.feature_names.iter().enumerate() {
            let encoder = CategoryEncoder::fit(rows.iter().map(|r| r.features[i].as_str()))?;
            columns.push((name.clone(), encoder));
        }
        let class_encoder = CategoryEncoder::fit(rows.iter().map(|r| r.class_label.as_str()))?;

        if class_encoder.encode(&self.config.positive_class) == SENTINEL_CODE {
            return Err(TrainingError::UnknownPositiveClass(
                self.config.positive_class.clone(),
            ));
        }

        let features = FeatureSet::new(columns);
        let x: Vec<FeatureVector> = rows
            .iter()
            .map(|r| {
                FeatureVector::new(
                    features
                        .columns()
                        .iter()
                        .enumerate()
                        .map(|(i, (_, enc))| enc.encode(&r.features[i]))
                        .collect(),
                )
            })
            .collect();
        let y: Vec<usize> = rows
            .iter()
            .map(|r| class_encoder.encode(&r.class_label) as usize)
            .collect();

        let classifier = self.fit_classifier(&features, &x, &y, class_encoder.cardinality())?;

        Ok(ModelArtifact {
            format_version: FORMAT_VERSION,
            created_at: Utc::now(),
            relation_name: header.relation_name,
            feature_names: header.feature_names,
            vocabularies: features
                .columns()
                .iter()
                .map(|(_, enc)| enc.vocabulary().to_vec())
                .collect(),
            class_labels: class_encoder.vocabulary().to_vec(),
            positive_class: self.config.positive_class.clone(),
            classifier,
        })
    }

    fn fit_classifier(
        &self,
        features: &FeatureSet,
        x: &[FeatureVector],
        y: &[usize],
        num_classes: usize,
    ) -> Result<ClassifierParams, TrainingError> {
        match self.config.learner {
            LearnerKind::LogisticRegression => {
                if num_classes != 2 {
                    return Err(TrainingError::BinaryLearnerOnMulticlass(num_classes));
                }
                Ok(LogisticRegression::fit(x, y).params())
            }
            LearnerKind::NaiveBayes => {
                let arities: Vec<usize> = features
                    .columns()
                    .iter()
                    .map(|(_, enc)| enc.cardinality())
                    .collect();
                Ok(
                    CategoricalNaiveBayes::fit(x, y, num_classes, &arities, self.config.smoothing)
                        .params(),
                )
            }
        }
    }
}
