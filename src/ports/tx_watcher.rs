//! Inclusion Watcher Port - Wait for Transaction Inclusion
//!
//! Given a submitted transaction hash, block (asynchronously) until
//! the network includes it, then report the terminal status. No
//! timeout and no retry policy: an underlying failure propagates to
//! the caller unretried.

use alloy::primitives::TxHash;
use async_trait::async_trait;

use crate::domain::action::InclusionStatus;

/// Trait for awaiting a transaction's inclusion in a block.
#[async_trait]
pub trait InclusionWatcher: Send + Sync + 'static {
    /// Wait until `hash` is included and return its terminal status.
    async fn wait_for_inclusion(&self, hash: TxHash) -> anyhow::Result<InclusionStatus>;
}
