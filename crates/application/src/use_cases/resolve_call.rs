use crate::services::{validate_request, GatewayContextCache};
use alloy::primitives::hex;
use alloy::sol_types::SolCall;
use ens_gateway_domain::abi::IResolverService::resolveCall;
use ens_gateway_domain::{DomainError, EncodedCall, SignedResponse};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Handles a CCIP-Read `resolve(bytes,bytes)` call end to end.
///
/// decode → validate → resolve → sign → encode; every stage short-circuits
/// the rest on failure.
pub struct ResolveCallUseCase {
    context: Arc<GatewayContextCache>,
}

impl ResolveCallUseCase {
    pub fn new(context: Arc<GatewayContextCache>) -> Self {
        Self { context }
    }

    #[instrument(skip(self, call), fields(sender = %call.to))]
    pub async fn execute(&self, call: &EncodedCall) -> Result<SignedResponse, DomainError> {
        match call.selector() {
            Some(selector) if selector == resolveCall::SELECTOR => {}
            other => {
                let selector = other.map(hex::encode_prefixed).unwrap_or_default();
                return Err(DomainError::UnsupportedSelector(selector));
            }
        }

        let resolve = resolveCall::abi_decode(&call.data)
            .map_err(|e| DomainError::MalformedCallData(format!("resolve(bytes,bytes): {}", e)))?;

        let validated = validate_request(&resolve.name, &resolve.data)?;

        let context = self.context.get().await?;
        let result = context
            .resolver
            .resolve(&validated.name, &validated.query)
            .await?;

        let valid_until = chrono::Utc::now().timestamp().max(0) as u64 + u64::from(result.ttl);
        let encoded = result.value.abi_encode();
        let signature = context
            .signer
            .sign(call.to, valid_until, &call.data, &encoded)?;

        debug!(
            name = %validated.name,
            function = %validated.query.signature(),
            valid_until,
            "Signed response"
        );

        Ok(SignedResponse {
            result: encoded,
            valid_until,
            signature,
        })
    }
}
