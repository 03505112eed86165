//! Receipt Watcher - Wait for Transaction Inclusion
//!
//! Implements the `InclusionWatcher` port by polling for the
//! transaction receipt. There is deliberately no timeout and no
//! retry: the poll runs until the network includes the transaction
//! or the RPC layer fails, and that failure propagates.

use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::TxHash;
use alloy::providers::Provider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::domain::action::InclusionStatus;
use crate::ports::tx_watcher::InclusionWatcher;

/// Polls the RPC endpoint for a transaction receipt.
pub struct ReceiptWatcher {
    /// Shared RPC provider.
    provider: Arc<dyn Provider + Send + Sync>,
    /// Delay between receipt queries.
    poll_interval: Duration,
}

impl ReceiptWatcher {
    /// Create a new watcher polling every `poll_interval`.
    pub fn new(provider: Arc<dyn Provider + Send + Sync>, poll_interval: Duration) -> Self {
        Self {
            provider,
            poll_interval,
        }
    }
}

#[async_trait]
impl InclusionWatcher for ReceiptWatcher {
    #[instrument(skip(self), fields(tx = %hash))]
    async fn wait_for_inclusion(&self, hash: TxHash) -> Result<InclusionStatus> {
        loop {
            let receipt = self
                .provider
                .get_transaction_receipt(hash)
                .await
                .context("Receipt query failed")?;

            if let Some(receipt) = receipt {
                let block = receipt.block_number.unwrap_or_default();
                let status = if receipt.status() {
                    InclusionStatus::Confirmed { block }
                } else {
                    InclusionStatus::Reverted
                };
                info!(block, status = ?status, "Transaction included");
                return Ok(status);
            }

            debug!("Not yet included, polling again");
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
