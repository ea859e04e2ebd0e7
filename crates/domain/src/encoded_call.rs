use crate::DomainError;
use alloy::primitives::{hex, Address, Bytes};
use std::str::FromStr;

/// The `(sender, callData)` pair a CCIP-Read client forwards to the gateway.
///
/// `to` is the OffchainResolver contract that raised `OffchainLookup`;
/// `data` is its `resolve(bytes,bytes)` call data. Both are covered by the
/// response signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCall {
    pub to: Address,
    pub data: Bytes,
}

impl EncodedCall {
    pub fn new(to: Address, data: impl Into<Bytes>) -> Self {
        Self {
            to,
            data: data.into(),
        }
    }

    /// Parse hex-encoded request parameters.
    pub fn parse(sender: &str, data: &str) -> Result<Self, DomainError> {
        let to = parse_address(sender)?;
        let data = hex::decode(data)
            .map_err(|e| DomainError::InvalidHex(format!("{}: {}", data, e)))?;
        Ok(Self::new(to, data))
    }

    pub fn selector(&self) -> Option<[u8; 4]> {
        self.data.get(..4).and_then(|s| s.try_into().ok())
    }
}

/// Mixed-case addresses must carry a valid EIP-55 checksum; all-lower and
/// all-upper forms are accepted as-is.
fn parse_address(sender: &str) -> Result<Address, DomainError> {
    let digits = sender.strip_prefix("0x").unwrap_or(sender);
    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());

    let parsed = if has_lower && has_upper {
        Address::parse_checksummed(sender, None).map_err(|e| e.to_string())
    } else {
        Address::from_str(sender).map_err(|e| e.to_string())
    };

    parsed.map_err(|e| DomainError::InvalidAddress(format!("{}: {}", sender, e)))
}
