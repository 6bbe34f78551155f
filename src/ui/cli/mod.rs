mod wizard;

pub use wizard::Wizard;
