//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::collections::HashSet;
use std::path::Path;

use alloy::primitives::Address;
use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
    let path = Path::new(path);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: AppConfig =
        toml::from_str(&content).with_context(|| "Failed to parse config.toml")?;

    validate_config(&config)?;

    info!(
        name = %config.console.name,
        deployments = config.deployments.len(),
        "Configuration loaded successfully"
    );

    Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty RPC endpoint
/// - Parseable contract addresses
/// - At least one deployment, with unique chain ids
/// - Positive polling intervals
fn validate_config(config: &AppConfig) -> Result<()> {
    // Chain validation
    anyhow::ensure!(
        !config.chain.rpc_url.is_empty(),
        "RPC endpoint URL must not be empty"
    );
    config
        .chain
        .multicall_address
        .parse::<Address>()
        .with_context(|| {
            format!(
                "Invalid multicall_address: {}",
                config.chain.multicall_address
            )
        })?;
    anyhow::ensure!(
        config.chain.receipt_poll_ms > 0,
        "receipt_poll_ms must be positive"
    );
    anyhow::ensure!(
        config.chain.session_poll_ms > 0,
        "session_poll_ms must be positive"
    );

    // Deployment validation
    anyhow::ensure!(
        !config.deployments.is_empty(),
        "At least one publisher deployment must be configured"
    );

    let mut seen = HashSet::new();
    for (i, deployment) in config.deployments.iter().enumerate() {
        anyhow::ensure!(
            !deployment.name.is_empty(),
            "Deployment {} has an empty network name",
            i
        );
        anyhow::ensure!(
            seen.insert(deployment.chain_id),
            "Deployment {} ({}) duplicates chain_id {}",
            i,
            deployment.name,
            deployment.chain_id
        );
        deployment
            .publisher_address
            .parse::<Address>()
            .with_context(|| {
                format!(
                    "Deployment {} ({}) has invalid publisher_address: {}",
                    i, deployment.name, deployment.publisher_address
                )
            })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_chain_id_rejected() {
        let toml = r#"
            [console]
            name = "test"

            [chain]
            rpc_url = "http://localhost:8545"
            multicall_address = "0xcA11bde05977b3631167028862bE2a173976CA11"

            [[deployments]]
            chain_id = 1
            name = "mainnet"
            publisher_address = "0xda5aba302810ab3f6a3f3e7f8ab0307c1f464bc9"

            [[deployments]]
            chain_id = 1
            name = "mainnet-again"
            publisher_address = "0xda5aba302810ab3f6a3f3e7f8ab0307c1f464bc9"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("duplicates chain_id"));
    }

    #[test]
    fn test_bad_publisher_address_rejected() {
        let toml = r#"
            [console]
            name = "test"

            [chain]
            rpc_url = "http://localhost:8545"
            multicall_address = "0xcA11bde05977b3631167028862bE2a173976CA11"

            [[deployments]]
            chain_id = 1
            name = "mainnet"
            publisher_address = "not-an-address"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_valid_config_accepted() {
        let toml = r#"
            [console]
            name = "test"

            [chain]
            rpc_url = "http://localhost:8545"
            multicall_address = "0xcA11bde05977b3631167028862bE2a173976CA11"

            [[deployments]]
            chain_id = 11155111
            name = "sepolia"
            publisher_address = "0xcba5846735a03ac02af69134Df1aB17f122DD2dD"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.chain.receipt_poll_ms, 7_000);
    }
}
