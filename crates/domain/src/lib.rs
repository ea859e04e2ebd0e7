//! ENS Gateway Domain Layer
pub mod abi;
pub mod config;
pub mod contract_mapping;
pub mod dns_name;
pub mod encoded_call;
pub mod errors;
pub mod namehash;
pub mod record_query;
pub mod signed_response;

pub use config::{CliOverrides, Config};
pub use contract_mapping::{ContractMappings, ContractResolver, RootRecord, TokenTarget};
pub use dns_name::{decode_dns_name, encode_dns_name};
pub use encoded_call::EncodedCall;
pub use errors::{DomainError, ErrorKind};
pub use namehash::{is_normalized, namehash};
pub use record_query::{QueryResult, RecordQuery, RecordValue, ETH_COIN_TYPE};
pub use signed_response::SignedResponse;
