pub mod gateway;

pub use gateway::{GatewayRequest, GatewayResponse};
