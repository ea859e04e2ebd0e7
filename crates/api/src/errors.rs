use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ens_gateway_domain::{DomainError, ErrorKind};
use tracing::{error, warn};

/// Failure of a gateway request, rendered as a plain-text body.
///
/// Client mistakes get a 400 with a short reason. Everything else is a 500
/// whose detail only reaches the logs.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    InvalidBody(String),
    Timeout,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl ApiError {
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "Invalid request".to_string()),
            ApiError::Timeout => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            ApiError::Domain(err) => match err.kind() {
                ErrorKind::MalformedInput => {
                    (StatusCode::BAD_REQUEST, "Invalid request".to_string())
                }
                ErrorKind::ProtocolViolation => match err {
                    DomainError::UnsupportedSelector(_) => {
                        (StatusCode::BAD_REQUEST, "Unsupported function".to_string())
                    }
                    other => (StatusCode::BAD_REQUEST, other.to_string()),
                },
                ErrorKind::UpstreamResolution | ErrorKind::Signing | ErrorKind::Internal => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        match &self {
            ApiError::Domain(err) if status.is_server_error() => {
                error!(error = %err, kind = ?err.kind(), "Gateway request failed");
            }
            ApiError::Domain(err) => warn!(error = %err, "Rejected gateway request"),
            ApiError::InvalidBody(reason) => warn!(reason = %reason, "Rejected request body"),
            ApiError::Timeout => error!("Gateway request exceeded its deadline"),
        }

        (status, message).into_response()
    }
}
