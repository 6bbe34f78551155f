use serde::{Deserialize, Serialize};

use crate::classifiers::{CategoricalNaiveBayes, LogisticRegression, RiskClassifier};

/// Learned classifier parameters in artifact form.
///
/// The tagged representation keeps the artifact self-describing: a loader
/// rebuilds the right learner from `kind` without any out-of-band hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierParams {
    LogisticRegression {
        weights: Vec<f64>,
        bias: f64,
    },
    CategoricalNaiveBayes {
        class_counts: Vec<f64>,
        /// Count tables indexed as `[feature][class][value]`.
        value_counts: Vec<Vec<Vec<f64>>>,
        smoothing: f64,
    },
}

impl ClassifierParams {
    /// Rebuilds a boxed learner from stored parameters.
    pub fn restore(&self) -> Box<dyn RiskClassifier> {
        match self {
            ClassifierParams::LogisticRegression { weights, bias } => {
                Box::new(LogisticRegression::from_params(weights.clone(), *bias))
            }
            ClassifierParams::CategoricalNaiveBayes {
                class_counts,
                value_counts,
                smoothing,
            } => Box::new(CategoricalNaiveBayes::from_params(
                class_counts.clone(),
                value_counts.clone(),
                *smoothing,
            )),
        }
    }

    /// Number of features these parameters were trained over.
    pub fn num_features(&self) -> usize {
        match self {
            ClassifierParams::LogisticRegression { weights, .. } => weights.len(),
            ClassifierParams::CategoricalNaiveBayes { value_counts, .. } => value_counts.len(),
        }
    }

    /// Number of classes these parameters can vote for.
    pub fn num_classes(&self) -> usize {
        match self {
            ClassifierParams::LogisticRegression { .. } => 2,
            ClassifierParams::CategoricalNaiveBayes { class_counts, .. } => class_counts.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features::FeatureVector;

    #[test]
    fn logistic_params_round_trip_through_json() {
        let params = ClassifierParams::LogisticRegression {
            weights: vec![0.5, -1.25, 2.0],
            bias: 0.75,
        };
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"kind\":\"logistic_regression\""));
        let back: ClassifierParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
        assert_eq!(back.num_features(), 3);
        assert_eq!(back.num_classes(), 2);
    }

    #[test]
    fn restored_learner_votes_like_the_original() {
        let params = ClassifierParams::LogisticRegression {
            weights: vec![2.0, -1.0],
            bias: 0.0,
        };
        let learner = params.restore();
        let v = FeatureVector::new(vec![1, 0]);
        let (code, confidence) = learner.predict_with_confidence(&v);
        assert_eq!(code, 1);
        assert!(confidence > 0.5);
        assert_eq!(learner.params(), params);
    }
}
