use crate::DomainError;
use alloy::primitives::{Address, U256};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Addresses answered directly for a name, without touching the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RootRecord {
    #[serde(default)]
    pub eth: Option<Address>,
}

/// How the names under one domain map onto an ERC-721 contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractResolver {
    #[serde(default)]
    pub contract_address: Option<Address>,

    /// Subdomain labels bound to a token id that is not their numeric value
    #[serde(default, deserialize_with = "null_as_empty")]
    pub overrides: HashMap<String, u64>,

    #[serde(default)]
    pub root: Option<RootRecord>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HashMap<String, u64>>::deserialize(deserializer)?.unwrap_or_default())
}

/// NFT whose owner answers an address query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenTarget {
    pub contract_address: Address,
    pub token_id: U256,
}

/// Domain → resolver descriptor, as stored under the `ContractMappings`
/// parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ContractMappings(HashMap<String, ContractResolver>);

impl ContractMappings {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::ConfigError(format!("Invalid contract mappings: {}", e)))
    }

    pub fn get(&self, domain: &str) -> Option<&ContractResolver> {
        self.0.get(domain)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Explicitly configured `root.eth` address for `name`.
    pub fn root_address(&self, name: &str) -> Option<Address> {
        self.get(name)
            .and_then(|resolver| resolver.root.as_ref())
            .and_then(|root| root.eth)
    }

    /// Map `subdomain.domain` onto the token that owns it.
    ///
    /// The first label is the subdomain; everything after it is the domain
    /// looked up in the mappings. The token id comes from an explicit
    /// override, otherwise from the subdomain parsed as a decimal integer.
    pub fn resolve_token(&self, name: &str) -> Result<TokenTarget, DomainError> {
        let (subdomain, domain) = name.split_once('.').unwrap_or((name, ""));

        let resolver = self
            .get(domain)
            .ok_or_else(|| DomainError::NoDomainMapping(domain.to_string()))?;

        let contract_address = resolver
            .contract_address
            .ok_or_else(|| DomainError::NoDomainMapping(domain.to_string()))?;

        let token_id = match resolver.overrides.get(subdomain) {
            Some(id) => U256::from(*id),
            None => parse_token_id(subdomain).ok_or_else(|| DomainError::NoMapping {
                domain: domain.to_string(),
                subdomain: subdomain.to_string(),
            })?,
        };

        Ok(TokenTarget {
            contract_address,
            token_id,
        })
    }
}

fn parse_token_id(label: &str) -> Option<U256> {
    if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    U256::from_str(label).ok()
}
