//! RPC Provider - alloy-rs 0.9 Connection Management
//!
//! Manages the connection to an Ethereum-compatible chain via
//! alloy-rs. Validates RPC connectivity at startup and exposes a
//! shared provider instance for all on-chain operations. The wallet
//! filler signs outgoing transactions with the session's local key.
//!
//! In alloy 0.9, `ProviderBuilder::new().on_http()` returns a complex
//! filler type. We store it as a type-erased `dyn Provider` to keep
//! the API clean across the adapter layer.

use std::sync::Arc;

use alloy::network::EthereumWallet;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::config::ChainConfig;

/// Shared RPC provider backed by alloy-rs 0.9.
///
/// All chain adapters share a single provider instance to avoid
/// redundant connections. Unlike a chain-pinned client, this provider
/// accepts whatever chain the endpoint serves; support for that chain
/// is decided later against the deployment table.
pub struct EvmProvider {
    /// The alloy HTTP provider with wallet filler (type-erased).
    provider: Arc<dyn Provider + Send + Sync>,
    /// Chain id reported by the endpoint at connect time.
    chain_id: u64,
}

impl EvmProvider {
    /// Connect to the configured RPC endpoint with a signing wallet.
    ///
    /// Queries the chain id at startup so the session starts with a
    /// known network. No chain is rejected here — unsupported chains
    /// surface as errors when the settings reader resolves the
    /// deployment table.
    #[instrument(skip_all)]
    pub async fn connect(config: &ChainConfig, signer: PrivateKeySigner) -> Result<Self> {
        let wallet = EthereumWallet::from(signer);

        // alloy 0.9: on_builtin() connects over a BoxTransport, which is
        // what the type-erased `dyn Provider` alias defaults to.
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .on_builtin(&config.rpc_url)
            .await
            .context("Invalid RPC URL")?;

        // Wrap in Arc<dyn Provider> for type erasure
        let provider: Arc<dyn Provider + Send + Sync> = Arc::new(provider);

        let chain_id = provider
            .get_chain_id()
            .await
            .context("Failed to query chain ID")?;

        info!(chain_id, "Connected to RPC endpoint");

        Ok(Self { provider, chain_id })
    }

    /// Get a shared reference to the alloy provider (type-erased).
    pub fn inner(&self) -> Arc<dyn Provider + Send + Sync> {
        Arc::clone(&self.provider)
    }

    /// Chain id observed when the connection was established.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Check if the RPC connection is healthy via a lightweight call.
    pub async fn is_healthy(&self) -> bool {
        self.provider.get_block_number().await.is_ok()
    }
}
