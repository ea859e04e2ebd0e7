pub mod env_store;
pub mod file_store;

pub use env_store::{env_var_name, EnvParameterStore};
pub use file_store::FileParameterStore;
