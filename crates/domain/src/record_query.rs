use crate::abi::IResolver;
use crate::DomainError;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::sol_types::{SolInterface, SolValue};

/// SLIP-44 coin type for ether.
pub const ETH_COIN_TYPE: u64 = 60;

/// A record lookup decoded from the inner resolver call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordQuery {
    /// `addr(bytes32)`
    Addr { node: B256 },
    /// `addr(bytes32,uint256)`
    AddrCoin { node: B256, coin_type: U256 },
    /// `text(bytes32,string)`
    Text { node: B256, key: String },
    /// `contenthash(bytes32)`
    ContentHash { node: B256 },
    /// Any other resolver function. `node` is the first argument word, when
    /// the call is long enough to carry one.
    Unsupported {
        selector: [u8; 4],
        node: Option<B256>,
    },
}

impl RecordQuery {
    /// Decode inner resolver call data.
    ///
    /// Unknown selectors decode to [`RecordQuery::Unsupported`]; a known
    /// selector with undecodable arguments is malformed input.
    pub fn decode(data: &[u8]) -> Result<Self, DomainError> {
        let selector: [u8; 4] = data
            .get(..4)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| {
                DomainError::MalformedCallData(format!(
                    "inner call data is {} bytes, expected a selector",
                    data.len()
                ))
            })?;

        if !IResolver::IResolverCalls::valid_selector(selector) {
            let node = data.get(4..36).map(B256::from_slice);
            return Ok(RecordQuery::Unsupported { selector, node });
        }

        let call = IResolver::IResolverCalls::abi_decode(data)
            .map_err(|e| DomainError::MalformedCallData(format!("inner call: {}", e)))?;

        Ok(match call {
            IResolver::IResolverCalls::addr_0(c) => RecordQuery::Addr { node: c.node },
            IResolver::IResolverCalls::addr_1(c) => RecordQuery::AddrCoin {
                node: c.node,
                coin_type: c.coinType,
            },
            IResolver::IResolverCalls::text(c) => RecordQuery::Text {
                node: c.node,
                key: c.key,
            },
            IResolver::IResolverCalls::contenthash(c) => RecordQuery::ContentHash { node: c.node },
        })
    }

    /// The namehash argument, when the query carries one.
    pub fn node(&self) -> Option<B256> {
        match self {
            RecordQuery::Addr { node }
            | RecordQuery::AddrCoin { node, .. }
            | RecordQuery::Text { node, .. }
            | RecordQuery::ContentHash { node } => Some(*node),
            RecordQuery::Unsupported { node, .. } => *node,
        }
    }

    /// Solidity signature of the queried function, for logging.
    pub fn signature(&self) -> String {
        match self {
            RecordQuery::Addr { .. } => "addr(bytes32)".to_string(),
            RecordQuery::AddrCoin { .. } => "addr(bytes32,uint256)".to_string(),
            RecordQuery::Text { .. } => "text(bytes32,string)".to_string(),
            RecordQuery::ContentHash { .. } => "contenthash(bytes32)".to_string(),
            RecordQuery::Unsupported { selector, .. } => {
                format!("0x{}", alloy::primitives::hex::encode(selector))
            }
        }
    }
}

/// Typed value a resolver function returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValue {
    Address(Address),
    Bytes(Bytes),
    Text(String),
}

impl RecordValue {
    /// ABI-encode as the single-value return tuple of the resolver function.
    pub fn abi_encode(&self) -> Bytes {
        let encoded = match self {
            RecordValue::Address(addr) => (*addr,).abi_encode_params(),
            RecordValue::Bytes(bytes) => (bytes.clone(),).abi_encode_params(),
            RecordValue::Text(text) => (text.clone(),).abi_encode_params(),
        };
        Bytes::from(encoded)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub value: RecordValue,
    pub ttl: u32,
}

impl QueryResult {
    pub fn new(value: RecordValue, ttl: u32) -> Self {
        Self { value, ttl }
    }

    pub fn empty_bytes(ttl: u32) -> Self {
        Self::new(RecordValue::Bytes(Bytes::new()), ttl)
    }

    pub fn empty_text(ttl: u32) -> Self {
        Self::new(RecordValue::Text(String::new()), ttl)
    }
}
