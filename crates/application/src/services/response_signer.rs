//! Response signing for the OffchainResolver verifier.
//!
//! The contract recomputes
//!
//! ```text
//! keccak256(0x1900 ‖ target ‖ uint64(expires) ‖ keccak256(request) ‖ keccak256(result))
//! ```
//!
//! and recovers the signer from the 64-byte compact (EIP-2098) signature. A
//! single byte out of place recovers a different address and the lookup
//! silently fails on-chain.

use alloy::primitives::{keccak256, Address, Bytes, Signature, B256, U256};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::SignerSync;
use ens_gateway_domain::DomainError;
use std::str::FromStr;

const SIGNATURE_PREFIX: [u8; 2] = [0x19, 0x00];

pub struct ResponseSigner {
    signer: PrivateKeySigner,
}

impl ResponseSigner {
    pub fn new(signer: PrivateKeySigner) -> Self {
        Self { signer }
    }

    /// Parse a hex private key, with or without `0x`.
    pub fn from_hex(private_key: &str) -> Result<Self, DomainError> {
        let signer = PrivateKeySigner::from_str(private_key.trim())
            .map_err(|e| DomainError::Signing(format!("invalid signing key: {}", e)))?;
        Ok(Self::new(signer))
    }

    /// Address the OffchainResolver must list as a trusted signer.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub fn sign(
        &self,
        target: Address,
        valid_until: u64,
        request: &[u8],
        result: &[u8],
    ) -> Result<Bytes, DomainError> {
        let digest = signing_digest(target, valid_until, request, result);
        let signature = self
            .signer
            .sign_hash_sync(&digest)
            .map_err(|e| DomainError::Signing(e.to_string()))?;
        Ok(Bytes::from(compact_signature(&signature).to_vec()))
    }
}

pub fn signing_digest(target: Address, valid_until: u64, request: &[u8], result: &[u8]) -> B256 {
    let mut message = Vec::with_capacity(2 + 20 + 8 + 32 + 32);
    message.extend_from_slice(&SIGNATURE_PREFIX);
    message.extend_from_slice(target.as_slice());
    message.extend_from_slice(&valid_until.to_be_bytes());
    message.extend_from_slice(keccak256(request).as_slice());
    message.extend_from_slice(keccak256(result).as_slice());
    keccak256(&message)
}

/// `r ‖ vs`, with the y-parity folded into the top bit of `s`.
pub fn compact_signature(signature: &Signature) -> [u8; 64] {
    let mut out = [0u8; 64];
    out[..32].copy_from_slice(&signature.r().to_be_bytes::<32>());
    out[32..].copy_from_slice(&signature.s().to_be_bytes::<32>());
    if signature.v() {
        out[32] |= 0x80;
    }
    out
}

/// Recover the signing address from a digest and a compact signature.
pub fn recover_signer(digest: B256, compact: &[u8]) -> Result<Address, DomainError> {
    if compact.len() != 64 {
        return Err(DomainError::Signing(format!(
            "compact signature must be 64 bytes, got {}",
            compact.len()
        )));
    }

    let r = U256::from_be_slice(&compact[..32]);
    let mut vs = [0u8; 32];
    vs.copy_from_slice(&compact[32..]);
    let y_parity = vs[0] & 0x80 != 0;
    vs[0] &= 0x7f;
    let s = U256::from_be_bytes(vs);

    Signature::new(r, s, y_parity)
        .recover_address_from_prehash(&digest)
        .map_err(|e| DomainError::Signing(format!("signature recovery failed: {}", e)))
}
