use std::collections::HashMap;

use crate::artifact::{ArtifactError, ModelArtifact};
use crate::classifiers::RiskClassifier;
use crate::core::features::{FeatureSet, PredictError};
use crate::service::RiskResult;

/// Inference facade: raw category strings in, risk label out.
///
/// Owns the encoders and the classifier rebuilt from one loaded artifact.
/// Every call is an independent, bounded, in-memory computation over that
/// read-only state; there is no cross-call coordination and no I/O after
/// construction.
pub struct PredictionService {
    features: FeatureSet,
    classifier: Box<dyn RiskClassifier>,
    class_labels: Vec<String>,
    positive_class: String,
}

impl PredictionService {
    /// Validates the artifact and rebuilds its encoders and classifier.
    pub fn from_artifact(artifact: &ModelArtifact) -> Result<PredictionService, ArtifactError> {
        artifact.validate()?;
        Ok(PredictionService {
            features: artifact.feature_set()?,
            classifier: artifact.classifier.restore(),
            class_labels: artifact.class_labels.clone(),
            positive_class: artifact.positive_class.clone(),
        })
    }

    /// Encodes, assembles and classifies one raw observation.
    ///
    /// A missing required feature fails with
    /// [`PredictError::MissingFeature`] and nothing is classified. Unseen
    /// values do not fail: the vector degrades to the sentinel and the
    /// result carries `degraded = true` so the caller can flag the reduced
    /// confidence.
    pub fn predict_from_labels(
        &self,
        raw: &HashMap<String, String>,
    ) -> Result<RiskResult, PredictError> {
        let vector = self.features.assemble(raw)?;
        let (code, confidence) = self.classifier.predict_with_confidence(&vector);
        Ok(RiskResult {
            label: self.class_labels[code].clone(),
            confidence,
            degraded: vector.is_degraded(),
        })
    }

    pub fn feature_set(&self) -> &FeatureSet {
        &self.features
    }

    pub fn class_labels(&self) -> &[String] {
        &self.class_labels
    }

    /// Whether `label` is the artifact's designated "risk present" class.
    pub fn is_positive(&self, label: &str) -> bool {
        label == self.positive_class
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::FORMAT_VERSION;
    use crate::classifiers::ClassifierParams;
    use chrono::Utc;

    /// Artifact whose classifier votes for class 1 ("NoAccident") exactly
    /// when the weather code is 0 ("Clear").
    fn artifact() -> ModelArtifact {
        ModelArtifact {
            format_version: FORMAT_VERSION,
            created_at: Utc::now(),
            relation_name: "accidents".into(),
            feature_names: vec!["Weather".into(), "Traffic".into()],
            vocabularies: vec![
                vec!["Clear".into(), "Foggy".into(), "Rainy".into()],
                vec!["High".into(), "Low".into(), "Medium".into()],
            ],
            class_labels: vec!["Accident".into(), "NoAccident".into()],
            positive_class: "Accident".into(),
            classifier: ClassifierParams::LogisticRegression {
                weights: vec![-4.0, 0.0],
                bias: 2.0,
            },
        }
    }

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn predicts_known_inputs_without_degradation() {
        let service = PredictionService::from_artifact(&artifact()).unwrap();

        let clear = service
            .predict_from_labels(&raw(&[("Weather", "Clear"), ("Traffic", "Low")]))
            .unwrap();
        assert_eq!(clear.label, "NoAccident");
        assert!(!clear.degraded);
        assert!(!service.is_positive(&clear.label));

        let rainy = service
            .predict_from_labels(&raw(&[("Weather", "Rainy"), ("Traffic", "High")]))
            .unwrap();
        assert_eq!(rainy.label, "Accident");
        assert!(rainy.confidence > 0.5);
        assert!(service.is_positive(&rainy.label));
    }

    #[test]
    fn unseen_value_yields_a_degraded_prediction() {
        let service = PredictionService::from_artifact(&artifact()).unwrap();
        let result = service
            .predict_from_labels(&raw(&[("Weather", "Snowy"), ("Traffic", "High")]))
            .unwrap();
        assert!(result.degraded);
        // Sentinel weather contributes -1.0 to the score; the prediction
        // is still produced, just flagged.
        assert_eq!(result.label, "NoAccident");
    }

    #[test]
    fn missing_feature_classifies_nothing() {
        let service = PredictionService::from_artifact(&artifact()).unwrap();
        let err = service
            .predict_from_labels(&raw(&[("Weather", "Clear")]))
            .unwrap_err();
        assert_eq!(err, PredictError::MissingFeature("Traffic".into()));
    }

    #[test]
    fn prediction_is_deterministic() {
        let service = PredictionService::from_artifact(&artifact()).unwrap();
        let input = raw(&[("Weather", "Foggy"), ("Traffic", "Medium")]);
        let a = service.predict_from_labels(&input).unwrap();
        let b = service.predict_from_labels(&input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_artifact_is_rejected_at_construction() {
        let mut broken = artifact();
        broken.vocabularies.pop();
        assert!(PredictionService::from_artifact(&broken).is_err());
    }

    #[test]
    fn ragged_count_tables_never_reach_inference() {
        // One table covering both classes, one covering only the first:
        // this must fail at construction, not on the first prediction.
        let mut broken = artifact();
        broken.classifier = ClassifierParams::CategoricalNaiveBayes {
            class_counts: vec![4.0, 4.0],
            value_counts: vec![
                vec![vec![2.0, 1.0, 1.0], vec![1.0, 2.0, 1.0]],
                vec![vec![1.0, 2.0, 1.0]],
            ],
            smoothing: 1.0,
        };
        assert!(PredictionService::from_artifact(&broken).is_err());
    }

    #[test]
    fn reordered_class_labels_are_rejected_at_construction() {
        let mut broken = artifact();
        broken.class_labels = vec!["NoAccident".into(), "Accident".into()];
        assert!(PredictionService::from_artifact(&broken).is_err());
    }
}
