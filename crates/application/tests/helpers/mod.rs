#![allow(dead_code)]

mod mock_chain;
mod mock_parameters;

pub use mock_chain::{MockChainConnector, MockChainReader};
pub use mock_parameters::MockParameterStore;

use alloy::primitives::{address, Address, Bytes, B256};
use alloy::sol_types::SolCall;
use ens_gateway_domain::abi::{IResolver, IResolverService};
use ens_gateway_domain::{encode_dns_name, namehash};

/// Well-known development key (first Hardhat/Anvil account).
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_SIGNER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

pub const RESOLVER_CONTRACT: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
pub const NFT_CONTRACT: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
pub const ROOT_OWNER: Address = address!("cccccccccccccccccccccccccccccccccccccccc");

pub const MAPPINGS_JSON: &str = r#"{
    "foo.eth": {
        "contractAddress": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        "overrides": { "vip": 7 }
    },
    "root.eth": {
        "contractAddress": "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        "root": { "eth": "0xcccccccccccccccccccccccccccccccccccccccc" }
    }
}"#;

pub fn addr_call(name: &str) -> Vec<u8> {
    IResolver::addr_0Call {
        node: namehash(name),
    }
    .abi_encode()
}

pub fn addr_call_with_node(node: B256) -> Vec<u8> {
    IResolver::addr_0Call { node }.abi_encode()
}

pub fn resolve_call(name: &str, inner: Vec<u8>) -> Vec<u8> {
    IResolverService::resolveCall {
        name: Bytes::from(encode_dns_name(name).unwrap()),
        data: Bytes::from(inner),
    }
    .abi_encode()
}
