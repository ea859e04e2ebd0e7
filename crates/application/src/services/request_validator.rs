use ens_gateway_domain::{decode_dns_name, is_normalized, namehash, DomainError, RecordQuery};
use tracing::debug;

/// A request that passed decoding and the name/namehash checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery {
    pub name: String,
    pub query: RecordQuery,
}

/// Decode the arguments of `resolve(bytes name, bytes data)` and check
/// they describe the same name.
///
/// The name must already be normalized, and the node argument of the inner
/// call must be the namehash of that name. This holds for unknown functions
/// too whenever their first argument word is present; the resolver rejects
/// them afterwards.
pub fn validate_request(
    encoded_name: &[u8],
    inner_data: &[u8],
) -> Result<ValidatedQuery, DomainError> {
    let name = decode_dns_name(encoded_name)?;
    let query = RecordQuery::decode(inner_data)?;

    if !is_normalized(&name) {
        return Err(DomainError::NameNotNormalized(name));
    }

    if let Some(node) = query.node() {
        if node != namehash(&name) {
            return Err(DomainError::NamehashMismatch(name));
        }
    }

    debug!(name = %name, function = %query.signature(), "Request validated");

    Ok(ValidatedQuery { name, query })
}
