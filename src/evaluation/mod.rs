mod confusion;
mod holdout;

pub use confusion::ConfusionSummary;
pub use holdout::holdout_split;
