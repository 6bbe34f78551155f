mod categorical_naive_bayes;
mod logistic_regression;
mod params;
mod risk_classifier;

pub use categorical_naive_bayes::{CategoricalNaiveBayes, DEFAULT_SMOOTHING};
pub use logistic_regression::LogisticRegression;
pub use params::ClassifierParams;
pub use risk_classifier::RiskClassifier;
