use crate::classifiers::{ClassifierParams, RiskClassifier};
use crate::core::features::FeatureVector;
use crate::utils::math::sigmoid;

const DEFAULT_EPOCHS: usize = 2000;
const DEFAULT_LEARNING_RATE: f64 = 0.3;

/// Binary logistic regression over raw feature codes.
///
/// The model scores `w · x + b` on the numeric view of a [`FeatureVector`]
/// (sentinel positions contribute -1.0) and squashes it through a sigmoid.
/// Class code 1 is the "positive" side of the sigmoid; what that code means
/// is decided by the class vocabulary stored next to these parameters, not
/// here.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    weights: Vec<f64>,
    bias: f64,
}

impl LogisticRegression {
    pub fn from_params(weights: Vec<f64>, bias: f64) -> LogisticRegression {
        LogisticRegression { weights, bias }
    }

    /// Deterministic full-batch gradient descent with the default schedule.
    ///
    /// `y` must contain class codes 0 and 1 only; the caller validates it
    /// is a binary problem. Identical inputs always produce identical
    /// weights: there is no random initialization or sampling anywhere.
    pub fn fit(x: &[FeatureVector], y: &[usize]) -> LogisticRegression {
        Self::fit_with_schedule(x, y, DEFAULT_EPOCHS, DEFAULT_LEARNING_RATE)
    }

    pub fn fit_with_schedule(
        x: &[FeatureVector],
        y: &[usize],
        epochs: usize,
        learning_rate: f64,
    ) -> LogisticRegression {
        let num_features = x.first().map(FeatureVector::len).unwrap_or(0);
        let mut model = LogisticRegression {
            weights: vec![0.0; num_features],
            bias: 0.0,
        };
        if x.is_empty() {
            return model;
        }

        let rows: Vec<Vec<f64>> = x.iter().map(FeatureVector::to_f64).collect();
        let n = rows.len() as f64;

        for _ in 0..epochs {
            let mut weight_gradient = vec![0.0; num_features];
            let mut bias_gradient = 0.0;

            for (row, &label) in rows.iter().zip(y) {
                let error = sigmoid(model.score(row)) - label as f64;
                for (g, &value) in weight_gradient.iter_mut().zip(row) {
                    *g += error * value;
                }
                bias_gradient += error;
            }

            for (w, g) in model.weights.iter_mut().zip(&weight_gradient) {
                *w -= learning_rate * g / n;
            }
            model.bias -= learning_rate * bias_gradient / n;
        }
        model
    }

    fn score(&self, row: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(row)
            .map(|(w, v)| w * v)
            .sum::<f64>()
            + self.bias
    }
}

impl RiskClassifier for LogisticRegression {
    fn class_probabilities(&self, vector: &FeatureVector) -> Vec<f64> {
        let p = sigmoid(self.score(&vector.to_f64()));
        vec![1.0 - p, p]
    }

    fn params(&self) -> ClassifierParams {
        ClassifierParams::LogisticRegression {
            weights: self.weights.clone(),
            bias: self.bias,
        }
    }
}
