use std::fmt::{Display, Formatter, Result};

/// Confusion counts over `(predicted, actual)` label pairs.
///
/// Labels are free-form strings so the summary can be built straight from
/// [`RiskResult`] labels and raw class labels without going through codes.
///
/// [`RiskResult`]: crate::service::RiskResult
#[derive(Debug, Clone, Default)]
pub struct ConfusionSummary {
    pairs: Vec<(String, String, usize)>,
    total: usize,
    correct: usize,
}

impl ConfusionSummary {
    pub fn new() -> ConfusionSummary {
        ConfusionSummary::default()
    }

    pub fn record(&mut self, predicted: &str, actual: &str) {
        self.total += 1;
        if predicted == actual {
            self.correct += 1;
        }
        match self
            .pairs
            .iter_mut()
            .find(|(p, a, _)| p == predicted && a == actual)
        {
            Some((_, _, count)) => *count += 1,
            None => self
                .pairs
                .push((predicted.to_string(), actual.to_string(), 1)),
        }
    }

    /// Fraction of recorded pairs where prediction matched truth;
    /// `NaN` before anything was recorded.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return f64::NAN;
        }
        self.correct as f64 / self.total as f64
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, predicted: &str, actual: &str) -> usize {
        self.pairs
            .iter()
            .find(|(p, a, _)| p == predicted && a == actual)
            .map(|(_, _, count)| *count)
            .unwrap_or(0)
    }
}

impl Display for ConfusionSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(
            f,
            "accuracy {:.4} over {} rows",
            self.accuracy(),
            self.total
        )?;
        for (predicted, actual, count) in &self.pairs {
            writeln!(f, "  predicted {predicted} / actual {actual}: {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_is_nan_when_empty() {
        assert!(ConfusionSummary::new().accuracy().is_nan());
    }

    #[test]
    fn tracks_correct_and_confused_pairs() {
        let mut summary = ConfusionSummary::new();
        summary.record("Accident", "Accident");
        summary.record("Accident", "Accident");
        summary.record("NoAccident", "Accident");
        summary.record("NoAccident", "NoAccident");

        assert_eq!(summary.total(), 4);
        assert!((summary.accuracy() - 0.75).abs() < 1e-12);
        assert_eq!(summary.count("Accident", "Accident"), 2);
        assert_eq!(summary.count("NoAccident", "Accident"), 1);
        assert_eq!(summary.count("Accident", "NoAccident"), 0);
    }
}
