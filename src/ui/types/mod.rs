mod choices;

pub use choices::{SourceChoice, TaskChoice};
