//! Approval Submitter Port - Write Operations
//!
//! The three approval writes. Each submits exactly one transaction
//! and returns its hash immediately — inclusion is the watcher's
//! concern, not the submitter's. Arguments are forwarded to the
//! underlying call without client-side validation; submission errors
//! propagate to the caller unmodified.

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;

/// Trait for submitting approval transactions to a publisher contract.
#[async_trait]
pub trait ApprovalSubmitter: Send + Sync + 'static {
    /// Submit `approve(to, tokenId)` to the publisher at `publisher`.
    ///
    /// Only one approval exists per token id at a time; submitting the
    /// zero address clears it. No address is special-cased here.
    async fn approve(
        &self,
        publisher: Address,
        to: Address,
        token_id: U256,
    ) -> anyhow::Result<TxHash>;

    /// Submit `setApprovalForAll(operator, approved)`.
    async fn set_approval_for_all(
        &self,
        publisher: Address,
        operator: Address,
        approved: bool,
    ) -> anyhow::Result<TxHash>;

    /// Submit `setApprovalForAll(publisher, true)` — approve the
    /// publisher contract itself as operator.
    async fn approve_publisher(&self, publisher: Address) -> anyhow::Result<TxHash>;
}
