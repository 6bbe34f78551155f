mod accident_generator;
pub mod domain;
mod rules;

pub use accident_generator::AccidentGenerator;
pub use rules::hazard_class_idx;
