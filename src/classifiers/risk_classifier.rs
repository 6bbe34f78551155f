use crate::classifiers::ClassifierParams;
use crate::core::features::FeatureVector;

/// Opaque classifier interface consumed by the prediction service.
///
/// Concrete learners are interchangeable behind this trait; nothing above
/// it depends on which model produced the probabilities.
pub trait RiskClassifier {
    /// One probability per class code, summing to 1.
    fn class_probabilities(&self, vector: &FeatureVector) -> Vec<f64>;

    /// Learned parameters, in the form stored inside a model artifact.
    fn params(&self) -> ClassifierParams;

    /// Most probable class code. Ties resolve to the lowest code.
    fn predict(&self, vector: &FeatureVector) -> usize {
        self.predict_with_confidence(vector).0
    }

    /// Most probable class code plus its probability in `[0, 1]`.
    fn predict_with_confidence(&self, vector: &FeatureVector) -> (usize, f64) {
        let probabilities = self.class_probabilities(vector);
        let mut best = 0;
        let mut best_probability = f64::NEG_INFINITY;
        for (code, &p) in probabilities.iter().enumerate() {
            if !p.is_finite() {
                continue;
            }
            if p > best_probability {
                best = code;
                best_probability = p;
            }
        }
        (best, best_probability.clamp(0.0, 1.0))
    }
}
