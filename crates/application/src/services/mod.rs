mod gateway_context;
mod record_resolver;
mod request_validator;
mod response_signer;

pub use gateway_context::{GatewayContext, GatewayContextCache};
pub use record_resolver::{RecordResolver, RootLookup};
pub use request_validator::{validate_request, ValidatedQuery};
pub use response_signer::{compact_signature, recover_signer, signing_digest, ResponseSigner};
