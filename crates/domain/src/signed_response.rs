use alloy::primitives::Bytes;
use alloy::sol_types::SolValue;

/// Payload returned for `resolve(bytes,bytes)`; verifiable on-chain without
/// further state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedResponse {
    pub result: Bytes,
    pub valid_until: u64,
    pub signature: Bytes,
}

impl SignedResponse {
    /// `abi.encode(bytes result, uint64 expires, bytes sig)`
    pub fn abi_encode(&self) -> Bytes {
        let encoded = (
            self.result.clone(),
            self.valid_until,
            self.signature.clone(),
        )
            .abi_encode_params();
        Bytes::from(encoded)
    }
}
