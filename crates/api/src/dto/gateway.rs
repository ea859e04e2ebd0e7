use serde::{Deserialize, Serialize};

/// Body of `POST /`, as sent by CCIP-Read clients.
#[derive(Debug, Deserialize)]
pub struct GatewayRequest {
    pub sender: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct GatewayResponse {
    pub data: String,
}
