use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use ens_gateway_domain::EncodedCall;
use tracing::{debug, instrument};

use crate::{
    dto::{GatewayRequest, GatewayResponse},
    errors::ApiError,
    state::AppState,
};

/// `GET /{sender}/{callData}`; ENS URL templates may append `.json`.
#[instrument(skip_all)]
pub async fn gateway_get(
    State(state): State<AppState>,
    Path((sender, call_data)): Path<(String, String)>,
) -> Result<Json<GatewayResponse>, ApiError> {
    let call_data = call_data.strip_suffix(".json").unwrap_or(&call_data);
    handle_call(&state, &sender, call_data).await
}

#[instrument(skip_all)]
pub async fn gateway_post(
    State(state): State<AppState>,
    body: Result<Json<GatewayRequest>, JsonRejection>,
) -> Result<Json<GatewayResponse>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    handle_call(&state, &request.sender, &request.data).await
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn handle_call(
    state: &AppState,
    sender: &str,
    data: &str,
) -> Result<Json<GatewayResponse>, ApiError> {
    let call = EncodedCall::parse(sender, data)?;

    let response = tokio::time::timeout(state.request_timeout, state.resolve_call.execute(&call))
        .await
        .map_err(|_| ApiError::Timeout)??;

    let encoded = response.abi_encode();
    debug!(
        sender = %call.to,
        valid_until = response.valid_until,
        response_len = encoded.len(),
        "Gateway request served"
    );

    Ok(Json(GatewayResponse {
        data: encoded.to_string(),
    }))
}
