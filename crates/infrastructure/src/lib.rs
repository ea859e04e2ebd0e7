pub mod chain;
pub mod parameters;
