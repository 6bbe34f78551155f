pub mod encoding;
pub mod features;
