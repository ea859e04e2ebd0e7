pub mod gateway;
pub mod health;

pub use gateway::{gateway_get, gateway_post, preflight};
pub use health::health_check;
