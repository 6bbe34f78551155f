use crate::classifiers::{ClassifierParams, RiskClassifier};
use crate::core::features::FeatureVector;

pub const DEFAULT_SMOOTHING: f64 = 1.0;

/// Multiclass naive Bayes over nominal feature codes.
///
/// Keeps one Laplace-smoothed count table per feature, indexed as
/// `[feature][class][value]`. A sentinel (or otherwise out-of-range) code
/// contributes no likelihood term, so a degraded vector is still scored
/// from the features that did encode.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalNaiveBayes {
    class_counts: Vec<f64>,
    value_counts: Vec<Vec<Vec<f64>>>,
    smoothing: f64,
}

impl CategoricalNaiveBayes {
    pub fn from_params(
        class_counts: Vec<f64>,
        value_counts: Vec<Vec<Vec<f64>>>,
        smoothing: f64,
    ) -> CategoricalNaiveBayes {
        CategoricalNaiveBayes {
            class_counts,
            value_counts,
            smoothing,
        }
    }

    /// Counts value/class co-occurrences over the training matrix.
    ///
    /// `arities[f]` is the vocabulary size of feature `f`; codes outside
    /// `0..arities[f]` are skipped. Counting is deterministic, so identical
    /// inputs always produce identical parameters.
    pub fn fit(
        x: &[FeatureVector],
        y: &[usize],
        num_classes: usize,
        arities: &[usize],
        smoothing: f64,
    ) -> CategoricalNaiveBayes {
        let mut class_counts = vec![0.0; num_classes];
        let mut value_counts: Vec<Vec<Vec<f64>>> = arities
            .iter()
            .map(|&arity| vec![vec![0.0; arity]; num_classes])
            .collect();

        for (vector, &class) in x.iter().zip(y) {
            if class >= num_classes {
                continue;
            }
            class_counts[class] += 1.0;
            for (feature, &code) in vector.codes().iter().enumerate() {
                if feature >= value_counts.len() {
                    break;
                }
                let arity = value_counts[feature][class].len();
                if code >= 0 && (code as usize) < arity {
                    value_counts[feature][class][code as usize] += 1.0;
                }
            }
        }

        CategoricalNaiveBayes {
            class_counts,
            value_counts,
            smoothing,
        }
    }

    fn log_likelihood(&self, class: usize, vector: &FeatureVector) -> f64 {
        let total: f64 = self.class_counts.iter().sum();
        let mut log_score = libm::log((self.class_counts[class] + self.smoothing)
            / (total + self.smoothing * self.class_counts.len() as f64));

        for (feature, &code) in vector.codes().iter().enumerate() {
            let Some(per_class) = self.value_counts.get(feature) else {
                break;
            };
            let arity = per_class[class].len();
            if code < 0 || code as usize >= arity {
                continue;
            }
            let numerator = per_class[class][code as usize] + self.smoothing;
            let denominator = self.class_counts[class] + self.smoothing * arity as f64;
            log_score += libm::log(numerator / denominator);
        }
        log_score
    }
}

impl RiskClassifier for CategoricalNaiveBayes {
    fn class_probabilities(&self, vector: &FeatureVector) -> Vec<f64> {
        let log_scores: Vec<f64> = (0..self.class_counts.len())
            .map(|class| self.log_likelihood(class, vector))
            .collect();

        // Normalize in log space to avoid underflow on many features.
        let max = log_scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let scores: Vec<f64> = log_scores.iter().map(|&s| libm::exp(s - max)).collect();
        let norm: f64 = scores.iter().sum();
        scores.iter().map(|&s| s / norm).collect()
    }

    fn params(&self) -> ClassifierParams {
        ClassifierParams::CategoricalNaiveBayes {
            class_counts: self.class_counts.clone(),
            value_counts: self.value_counts.clone(),
            smoothing: self.smoothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encoding::SENTINEL_CODE;

    fn vectors(rows: &[&[i64]]) -> Vec<FeatureVector> {
        rows.iter().map(|r| FeatureVector::new(r.to_vec())).collect()
    }

    /// Single feature, two values, perfectly separated classes.
    fn separable() -> CategoricalNaiveBayes {
        let x = vectors(&[&[0], &[0], &[1], &[1]]);
        let y = vec![0, 0, 1, 1];
        CategoricalNaiveBayes::fit(&x, &y, 2, &[2], DEFAULT_SMOOTHING)
    }

    #[test]
    fn predicts_the_separating_value() {
        let model = separable();
        assert_eq!(model.predict(&FeatureVector::new(vec![0])), 0);
        assert_eq!(model.predict(&FeatureVector::new(vec![1])), 1);
    }

    #[test]
    fn probabilities_are_normalized() {
        let model = separable();
        let p = model.class_probabilities(&FeatureVector::new(vec![1]));
        assert_eq!(p.len(), 2);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(p.iter().all(|&q| (0.0..=1.0).contains(&q)));
    }

    #[test]
    fn sentinel_feature_falls_back_to_the_prior() {
        // Class 1 is three times as frequent as class 0.
        let x = vectors(&[&[0], &[1], &[1], &[1]]);
        let y = vec![0, 1, 1, 1];
        let model = CategoricalNaiveBayes::fit(&x, &y, 2, &[2], DEFAULT_SMOOTHING);

        let degraded = FeatureVector::new(vec![SENTINEL_CODE]);
        let (code, confidence) = model.predict_with_confidence(&degraded);
        assert_eq!(code, 1);
        assert!(confidence > 0.5);
    }

    #[test]
    fn handles_three_classes() {
        let x = vectors(&[&[0], &[1], &[2]]);
        let y = vec![0, 1, 2];
        let model = CategoricalNaiveBayes::fit(&x, &y, 3, &[3], DEFAULT_SMOOTHING);
        assert_eq!(model.predict(&FeatureVector::new(vec![2])), 2);
        assert_eq!(model.class_probabilities(&FeatureVector::new(vec![0])).len(), 3);
    }

    #[test]
    fn params_round_trip_restores_identical_votes() {
        let model = separable();
        let restored = model.params().restore();
        let v = FeatureVector::new(vec![1]);
        assert_eq!(
            model.class_probabilities(&v),
            restored.class_probabilities(&v)
        );
    }
}
