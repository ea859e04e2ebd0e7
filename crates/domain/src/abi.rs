//! Solidity interfaces spoken by the gateway.
//!
//! `IResolverService` is the outer CCIP-Read call the OffchainResolver
//! contract forwards; `IResolver` is the standard ENS resolver ABI carried
//! inside it. `IERC721` and `IENSRegistry` are the contracts read on-chain.

use alloy::sol;

sol! {
    interface IResolverService {
        function resolve(bytes name, bytes data) external view returns (bytes result, uint64 expires, bytes sig);
    }

    interface IResolver {
        function addr(bytes32 node) external view returns (address);
        function addr(bytes32 node, uint256 coinType) external view returns (bytes);
        function text(bytes32 node, string key) external view returns (string);
        function contenthash(bytes32 node) external view returns (bytes);
    }

    interface IERC721 {
        function ownerOf(uint256 tokenId) external view returns (address);
    }

    interface IENSRegistry {
        function owner(bytes32 node) external view returns (address);
    }
}
