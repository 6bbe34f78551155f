mod accident;

pub use accident::{AccidentGenerator, hazard_class_idx};
