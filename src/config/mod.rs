//! Configuration Module - TOML-based Console Configuration
//!
//! Loads and validates configuration from `config.toml`.
//! All contract addresses and chain parameters are externalized
//! here - nothing is hardcoded in the domain layer. The signing
//! key is deliberately NOT part of the file config; it comes from
//! the environment (see `adapters::chain::session`).

pub mod loader;

use serde::Deserialize;

/// Top-level console configuration.
///
/// Loaded from `config.toml` at startup. All fields are validated
/// before the console connects to the chain.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Console identity and logging.
    pub console: ConsoleConfig,
    /// RPC endpoint and polling parameters.
    pub chain: ChainConfig,
    /// Publisher contract deployments, one per supported chain.
    pub deployments: Vec<DeploymentConfig>,
}

/// Console identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Human-readable console name.
    pub name: String,
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Chain access configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    /// Ethereum-compatible RPC endpoint URL.
    pub rpc_url: String,
    /// Multicall3 contract address (same on all supported chains).
    pub multicall_address: String,
    /// Receipt polling interval while waiting for inclusion (milliseconds).
    #[serde(default = "default_receipt_poll_ms")]
    pub receipt_poll_ms: u64,
    /// Chain-id polling interval for the session watcher (milliseconds).
    #[serde(default = "default_session_poll_ms")]
    pub session_poll_ms: u64,
}

/// A single publisher contract deployment.
///
/// Maps a chain id to the deployed publisher address. Connecting
/// on a chain with no entry here is an unsupported-chain error.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentConfig {
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// Human-readable network name (mainnet, sepolia, ...).
    pub name: String,
    /// Deployed publisher contract address.
    pub publisher_address: String,
}

// Default value functions for serde

fn default_log_level() -> String {
    "info".to_string()
}

fn default_receipt_poll_ms() -> u64 {
    7_000
}

fn default_session_poll_ms() -> u64 {
    12_000
}
