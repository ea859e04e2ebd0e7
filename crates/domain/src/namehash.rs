use alloy::primitives::{keccak256, B256};

/// Compute the ENS namehash for a domain name (EIP-137).
pub fn namehash(name: &str) -> B256 {
    let mut node = B256::ZERO;
    if name.is_empty() {
        return node;
    }
    for label in name.rsplit('.') {
        let label_hash = keccak256(label.as_bytes());
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(node.as_slice());
        buf[32..].copy_from_slice(label_hash.as_slice());
        node = keccak256(buf);
    }
    node
}

/// Whether `name` is already in its UTS-46 mapped form.
///
/// Names are never normalized on the caller's behalf: the namehash the
/// contract computed was taken over the exact bytes it sent, so a name that
/// changes under mapping (upper case, compatibility characters, unmapped
/// code points) cannot be answered.
pub fn is_normalized(name: &str) -> bool {
    if name.is_empty() {
        return true;
    }
    let (mapped, result) = idna::domain_to_unicode(name);
    result.is_ok() && mapped == name
}
