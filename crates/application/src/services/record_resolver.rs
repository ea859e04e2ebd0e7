use crate::ports::ChainReader;
use alloy::primitives::{Address, Bytes, U256};
use ens_gateway_domain::{
    namehash, ContractMappings, DomainError, QueryResult, RecordQuery, RecordValue, ETH_COIN_TYPE,
};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Outcome of the root-domain strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootLookup {
    Found(Address),
    NotFound,
}

/// Answers record queries from the contract mappings and the chain.
pub struct RecordResolver {
    chain: Arc<dyn ChainReader>,
    mappings: Arc<ContractMappings>,
    ttl: u32,
}

impl RecordResolver {
    pub fn new(chain: Arc<dyn ChainReader>, mappings: Arc<ContractMappings>, ttl: u32) -> Self {
        Self {
            chain,
            mappings,
            ttl,
        }
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn mappings(&self) -> &ContractMappings {
        &self.mappings
    }

    #[instrument(skip(self, query), fields(function = %query.signature()))]
    pub async fn resolve(&self, name: &str, query: &RecordQuery) -> Result<QueryResult, DomainError> {
        match query {
            RecordQuery::Addr { .. } => {
                let owner = self.resolve_owner(name).await?;
                Ok(QueryResult::new(RecordValue::Address(owner), self.ttl))
            }
            RecordQuery::AddrCoin { coin_type, .. } => {
                if *coin_type != U256::from(ETH_COIN_TYPE) {
                    debug!(coin_type = %coin_type, "Non-ETH coin type, returning empty address");
                    return Ok(QueryResult::empty_bytes(self.ttl));
                }
                let owner = self.resolve_owner(name).await?;
                Ok(QueryResult::new(
                    RecordValue::Bytes(Bytes::copy_from_slice(owner.as_slice())),
                    self.ttl,
                ))
            }
            RecordQuery::Text { .. } => Ok(QueryResult::empty_text(self.ttl)),
            RecordQuery::ContentHash { .. } => Ok(QueryResult::empty_bytes(self.ttl)),
            RecordQuery::Unsupported { .. } => {
                Err(DomainError::UnsupportedQuery(query.signature()))
            }
        }
    }

    /// Root strategy first, then the NFT that owns the subdomain.
    async fn resolve_owner(&self, name: &str) -> Result<Address, DomainError> {
        if let RootLookup::Found(owner) = self.resolve_root(name).await {
            return Ok(owner);
        }

        let target = self.mappings.resolve_token(name)?;
        let owner = self
            .chain
            .owner_of(target.contract_address, target.token_id)
            .await?;

        debug!(
            contract = %target.contract_address,
            token_id = %target.token_id,
            owner = %owner,
            "Resolved owner from NFT"
        );
        Ok(owner)
    }

    /// A configured `root.eth` wins; otherwise the ENS registry owner.
    ///
    /// Registry failures are reported as [`RootLookup::NotFound`] so that the
    /// caller falls through to the contract-backed lookup.
    pub async fn resolve_root(&self, name: &str) -> RootLookup {
        if let Some(owner) = self.mappings.root_address(name) {
            debug!(owner = %owner, "Resolved owner from root mapping");
            return RootLookup::Found(owner);
        }

        match self.chain.registry_owner(namehash(name)).await {
            Ok(owner) if !owner.is_zero() => {
                debug!(owner = %owner, "Resolved owner from ENS registry");
                RootLookup::Found(owner)
            }
            Ok(_) => RootLookup::NotFound,
            Err(e) => {
                warn!(error = %e, "ENS registry lookup failed, falling back to contract mapping");
                RootLookup::NotFound
            }
        }
    }
}
