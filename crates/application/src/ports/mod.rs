mod chain_reader;
mod parameter_store;

pub use chain_reader::{ChainConnector, ChainReader};
pub use parameter_store::ParameterStore;
