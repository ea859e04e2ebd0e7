use ens_gateway_application::use_cases::ResolveCallUseCase;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub resolve_call: Arc<ResolveCallUseCase>,
    /// Upper bound for a whole gateway request, upstream calls included.
    pub request_timeout: Duration,
}
