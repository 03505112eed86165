//! Approval Submitter - Publisher Write Transactions
//!
//! Implements the `ApprovalSubmitter` port. Each operation encodes
//! one call against the publisher contract, submits it through the
//! wallet-filled provider, and returns the transaction hash without
//! awaiting inclusion. Arguments are forwarded as given — the zero
//! address clears an approval on-chain and is not special-cased here.

use std::sync::Arc;

use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, instrument};

use crate::ports::approvals::ApprovalSubmitter;

use super::bindings::{approveCall, setApprovalForAllCall};

/// Submits approval transactions for the session's wallet.
pub struct PublisherApprovals {
    /// Shared RPC provider with wallet filler.
    provider: Arc<dyn Provider + Send + Sync>,
    /// The signing account.
    account: Address,
}

impl PublisherApprovals {
    /// Create a new submitter for `account`.
    pub fn new(provider: Arc<dyn Provider + Send + Sync>, account: Address) -> Self {
        Self { provider, account }
    }

    /// Submit one transaction and return its hash immediately.
    ///
    /// Submission errors propagate unmodified; display and resubmit
    /// policy belong to the caller.
    async fn submit(&self, publisher: Address, calldata: Vec<u8>) -> Result<TxHash> {
        let tx = TransactionRequest::default()
            .from(self.account)
            .to(publisher)
            .input(Bytes::from(calldata).into());

        let pending = self.provider.send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }
}

#[async_trait]
impl ApprovalSubmitter for PublisherApprovals {
    #[instrument(skip(self))]
    async fn approve(
        &self,
        publisher: Address,
        to: Address,
        token_id: U256,
    ) -> Result<TxHash> {
        let calldata = approveCall { to, tokenId: token_id }.abi_encode();
        let hash = self.submit(publisher, calldata).await?;
        info!(tx = %hash, "approve submitted");
        Ok(hash)
    }

    #[instrument(skip(self))]
    async fn set_approval_for_all(
        &self,
        publisher: Address,
        operator: Address,
        approved: bool,
    ) -> Result<TxHash> {
        let calldata = setApprovalForAllCall { operator, approved }.abi_encode();
        let hash = self.submit(publisher, calldata).await?;
        info!(tx = %hash, "setApprovalForAll submitted");
        Ok(hash)
    }

    #[instrument(skip(self))]
    async fn approve_publisher(&self, publisher: Address) -> Result<TxHash> {
        self.set_approval_for_all(publisher, publisher, true).await
    }
}
