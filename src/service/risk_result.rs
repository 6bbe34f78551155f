use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

/// Outcome of one `predict_from_labels` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskResult {
    /// Predicted class label, taken from the artifact's label vocabulary.
    pub label: String,
    /// Probability of the predicted class, in `[0, 1]`.
    pub confidence: f64,
    /// True when at least one input value was unseen during training.
    /// Front ends should surface this rather than hide it.
    pub degraded: bool,
}

impl Display for RiskResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} ({:.1}% confidence{})",
            self.label,
            self.confidence * 100.0,
            if self.degraded { ", degraded" } else { "" }
        )
    }
}
