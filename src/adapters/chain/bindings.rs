//! Contract Bindings - Typed Calldata via `sol!`
//!
//! The fixed ABI surface the console consumes, split across three
//! targets: the publisher contract, the underlying ERC-721 token it
//! wraps, and Multicall3 for batching read-only calls into a single
//! request. Calldata is encoded and decoded with the generated
//! `SolCall` types; no ABI strings are parsed at runtime.

use alloy::sol;

sol! {
    // Publisher contract surface.
    function approve(address to, uint256 tokenId);
    function getApproved(uint256 tokenId) external view returns (address);
    function isApprovedForAll(address owner, address operator) external view returns (bool);
    function isApprovedToPublish(address publisher, uint256 tokenId) external view returns (bool);
    function ketherNFT() external view returns (address);
    function ketherSortition() external view returns (address);
    function publish(uint256 _idx, string _link, string _image, string _title, bool _NSFW);
    function publishFeeAmount() external view returns (uint256);
    function publishFeeToken() external view returns (address);
    function publishTimeout() external view returns (uint256);
    function setApprovalForAll(address operator, bool approved);

    // ERC-721 token-side fragment (the publisher's isApprovedForAll
    // definition above doubles for the token target).
    function balanceOf(address owner) external view returns (uint256);

    // Multicall3 aggregate3.
    struct Call3 {
        address target;
        bool allowFailure;
        bytes callData;
    }

    struct Result3 {
        bool success;
        bytes returnData;
    }

    function aggregate3(Call3[] calldata calls) external payable returns (Result3[] memory returnData);
}
