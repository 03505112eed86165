//! Settings Reader Port - Batched Contract Reads
//!
//! One operation: build a full settings snapshot for a chain and
//! account. The implementation resolves the chain against the
//! deployment table first and must not issue any contract call for
//! an unsupported chain.

use alloy::primitives::Address;
use async_trait::async_trait;

use crate::domain::settings::PublisherSettings;

/// Trait for reading the publisher contract's settings.
///
/// A snapshot is built from one batched read per target contract;
/// results map positionally into named fields. A new snapshot fully
/// supersedes any previous one.
#[async_trait]
pub trait SettingsReader: Send + Sync + 'static {
    /// Read a complete settings snapshot for `account` on `chain_id`.
    ///
    /// Fails with an unsupported-chain error, before any contract
    /// call, when `chain_id` has no deployment entry.
    async fn read_settings(
        &self,
        chain_id: u64,
        account: Address,
    ) -> anyhow::Result<PublisherSettings>;
}
