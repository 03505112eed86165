//! Deployment Table - Chain Id to Publisher Address
//!
//! Static per-session lookup built from config. Resolving an unknown
//! chain fails fast with an unsupported-chain error, before any
//! contract call is attempted.

use std::collections::HashMap;

use alloy::primitives::Address;
use anyhow::{Context, Result};

use crate::config::DeploymentConfig;
use crate::domain::error::PublisherError;

/// A resolved publisher deployment.
#[derive(Debug, Clone)]
pub struct Deployment {
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// Human-readable network name.
    pub name: String,
    /// Deployed publisher contract address.
    pub publisher: Address,
}

/// Lookup table of publisher deployments keyed by chain id.
#[derive(Debug, Clone)]
pub struct DeploymentTable {
    entries: HashMap<u64, Deployment>,
}

impl DeploymentTable {
    /// Build the table from validated config entries.
    pub fn from_config(configs: &[DeploymentConfig]) -> Result<Self> {
        let mut entries = HashMap::with_capacity(configs.len());
        for config in configs {
            let publisher: Address = config.publisher_address.parse().with_context(|| {
                format!(
                    "Invalid publisher address for {}: {}",
                    config.name, config.publisher_address
                )
            })?;
            entries.insert(
                config.chain_id,
                Deployment {
                    chain_id: config.chain_id,
                    name: config.name.clone(),
                    publisher,
                },
            );
        }
        Ok(Self { entries })
    }

    /// Resolve the deployment for `chain_id`.
    ///
    /// # Errors
    /// `PublisherError::UnsupportedChain` when no entry exists.
    pub fn resolve(&self, chain_id: u64) -> Result<&Deployment, PublisherError> {
        self.entries
            .get(&chain_id)
            .ok_or(PublisherError::UnsupportedChain { chain_id })
    }

    /// Number of configured deployments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
