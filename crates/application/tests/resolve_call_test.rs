mod helpers;

use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;
use ens_gateway_application::ports::{ChainConnector, ParameterStore};
use ens_gateway_application::services::{recover_signer, signing_digest, GatewayContextCache};
use ens_gateway_application::use_cases::ResolveCallUseCase;
use ens_gateway_domain::abi::{IResolver, IResolverService};
use ens_gateway_domain::config::ParametersConfig;
use ens_gateway_domain::{namehash, DomainError, EncodedCall, ErrorKind};
use helpers::{
    addr_call, resolve_call, MockChainConnector, MockChainReader, MockParameterStore,
    NFT_CONTRACT, RESOLVER_CONTRACT, TEST_SIGNER,
};
use std::sync::Arc;

const OWNER: Address = alloy::primitives::address!("4242424242424242424242424242424242424242");

struct Fixture {
    use_case: ResolveCallUseCase,
    store: Arc<MockParameterStore>,
    chain: Arc<MockChainReader>,
}

fn make_fixture() -> Fixture {
    let store = Arc::new(MockParameterStore::provisioned());
    let chain = Arc::new(MockChainReader::new());
    chain.set_owner(NFT_CONTRACT, 42, OWNER);

    let connector = Arc::new(MockChainConnector::new(chain.clone()));
    let cache = Arc::new(GatewayContextCache::new(
        store.clone() as Arc<dyn ParameterStore>,
        connector as Arc<dyn ChainConnector>,
        ParametersConfig::default(),
        300,
    ));

    Fixture {
        use_case: ResolveCallUseCase::new(cache),
        store,
        chain,
    }
}

fn now() -> u64 {
    chrono::Utc::now().timestamp() as u64
}

#[tokio::test]
async fn test_addr_request_is_signed_and_verifiable() {
    let fixture = make_fixture();
    let data = resolve_call("42.foo.eth", addr_call("42.foo.eth"));
    let call = EncodedCall::new(RESOLVER_CONTRACT, data.clone());

    let before = now();
    let response = fixture.use_case.execute(&call).await.unwrap();
    let after = now();

    let owner = IResolver::addr_0Call::abi_decode_returns(&response.result).unwrap();
    assert_eq!(owner, OWNER);

    assert!(response.valid_until >= before + 300);
    assert!(response.valid_until <= after + 300);

    let digest = signing_digest(
        RESOLVER_CONTRACT,
        response.valid_until,
        &data,
        &response.result,
    );
    assert_eq!(recover_signer(digest, &response.signature).unwrap(), TEST_SIGNER);
}

#[tokio::test]
async fn test_encoded_response_decodes_as_resolve_return() {
    let fixture = make_fixture();
    let call = EncodedCall::new(
        RESOLVER_CONTRACT,
        resolve_call("42.foo.eth", addr_call("42.foo.eth")),
    );

    let response = fixture.use_case.execute(&call).await.unwrap();
    let decoded =
        IResolverService::resolveCall::abi_decode_returns(&response.abi_encode()).unwrap();

    assert_eq!(decoded.result, response.result);
    assert_eq!(decoded.expires, response.valid_until);
    assert_eq!(decoded.sig, response.signature);
}

#[tokio::test]
async fn test_signature_covers_sender() {
    let fixture = make_fixture();
    let data = resolve_call("42.foo.eth", addr_call("42.foo.eth"));
    let call = EncodedCall::new(RESOLVER_CONTRACT, data.clone());

    let response = fixture.use_case.execute(&call).await.unwrap();
    let digest = signing_digest(Address::ZERO, response.valid_until, &data, &response.result);

    let recovered = recover_signer(digest, &response.signature);
    assert!(recovered.map(|a| a != TEST_SIGNER).unwrap_or(true));
}

#[tokio::test]
async fn test_text_request_returns_empty_string() {
    let fixture = make_fixture();
    let inner = IResolver::textCall {
        node: namehash("42.foo.eth"),
        key: "email".to_string(),
    }
    .abi_encode();
    let call = EncodedCall::new(RESOLVER_CONTRACT, resolve_call("42.foo.eth", inner));

    let response = fixture.use_case.execute(&call).await.unwrap();
    let text = IResolver::textCall::abi_decode_returns(&response.result).unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn test_non_eth_coin_type_returns_empty_bytes() {
    let fixture = make_fixture();
    let inner = IResolver::addr_1Call {
        node: namehash("42.foo.eth"),
        coinType: U256::from(0u64),
    }
    .abi_encode();
    let call = EncodedCall::new(RESOLVER_CONTRACT, resolve_call("42.foo.eth", inner));

    let response = fixture.use_case.execute(&call).await.unwrap();
    let value = IResolver::addr_1Call::abi_decode_returns(&response.result).unwrap();
    assert!(value.is_empty());
    assert_eq!(fixture.chain.owner_of_calls(), 0);
}

#[tokio::test]
async fn test_unsupported_selector_is_rejected_before_loading_parameters() {
    let fixture = make_fixture();
    let call = EncodedCall::new(RESOLVER_CONTRACT, vec![0xde, 0xad, 0xbe, 0xef]);

    let err = fixture.use_case.execute(&call).await.unwrap_err();

    assert!(matches!(err, DomainError::UnsupportedSelector(ref s) if s == "0xdeadbeef"));
    assert_eq!(fixture.store.calls(), 0);
}

#[tokio::test]
async fn test_empty_call_data_is_unsupported_selector() {
    let fixture = make_fixture();
    let call = EncodedCall::new(RESOLVER_CONTRACT, Vec::new());

    assert!(matches!(
        fixture.use_case.execute(&call).await,
        Err(DomainError::UnsupportedSelector(_))
    ));
}

#[tokio::test]
async fn test_truncated_resolve_arguments_are_malformed() {
    let fixture = make_fixture();
    let mut data = IResolverService::resolveCall::SELECTOR.to_vec();
    data.extend_from_slice(&[0u8; 16]);
    let call = EncodedCall::new(RESOLVER_CONTRACT, data);

    let err = fixture.use_case.execute(&call).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[tokio::test]
async fn test_namehash_mismatch_is_rejected_without_lookups() {
    let fixture = make_fixture();
    let call = EncodedCall::new(
        RESOLVER_CONTRACT,
        resolve_call("42.foo.eth", addr_call("7.foo.eth")),
    );

    let err = fixture.use_case.execute(&call).await.unwrap_err();

    assert!(matches!(err, DomainError::NamehashMismatch(_)));
    assert_eq!(fixture.chain.owner_of_calls(), 0);
}

#[tokio::test]
async fn test_unmapped_subdomain_fails_request() {
    let fixture = make_fixture();
    let call = EncodedCall::new(
        RESOLVER_CONTRACT,
        resolve_call("bar.foo.eth", addr_call("bar.foo.eth")),
    );

    let err = fixture.use_case.execute(&call).await.unwrap_err();
    assert!(matches!(err, DomainError::NoMapping { .. }));
}

#[tokio::test]
async fn test_missing_signing_key_aborts_request() {
    let fixture = make_fixture();
    fixture.store.remove("/offchain-ens-resolver/PrivateKey");
    let call = EncodedCall::new(
        RESOLVER_CONTRACT,
        resolve_call("42.foo.eth", addr_call("42.foo.eth")),
    );

    let err = fixture.use_case.execute(&call).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Signing);
}
