//! Settings Reader - Batched Publisher Contract Reads
//!
//! Implements the `SettingsReader` port via Multicall3. Each refresh
//! issues one `aggregate3` batch against the publisher contract for
//! the contract-level getters and the caller's publisher-operator
//! flag, then a second batch against the underlying token (whose
//! address the first batch resolved) for the caller's balance and
//! sortition-operator flag. Results map positionally into the
//! snapshot's named fields.

use std::sync::Arc;

use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::domain::error::PublisherError;
use crate::domain::settings::PublisherSettings;
use crate::ports::settings_reader::SettingsReader;

use super::bindings::{
    aggregate3Call, balanceOfCall, isApprovedForAllCall, ketherNFTCall, ketherSortitionCall,
    publishFeeAmountCall, publishFeeTokenCall, publishTimeoutCall, Call3,
};
use super::deployments::DeploymentTable;

/// A named call queued into one `aggregate3` batch.
type BatchCall = (&'static str, Address, Vec<u8>);

/// Contract-level fields decoded from the publisher batch.
#[derive(Debug)]
struct PublisherBatch {
    token: Address,
    sortition: Address,
    publish_timeout: U256,
    fee_token: Address,
    fee_amount: U256,
    publisher_approved: bool,
}

/// Per-caller fields decoded from the token batch.
#[derive(Debug)]
struct TokenBatch {
    token_balance: U256,
    sortition_approved: bool,
}

/// Reads publisher settings snapshots through Multicall3.
pub struct MulticallSettingsReader {
    /// Shared RPC provider.
    provider: Arc<dyn Provider + Send + Sync>,
    /// Chain id → publisher address lookup.
    deployments: DeploymentTable,
    /// Multicall3 contract address.
    multicall: Address,
}

impl MulticallSettingsReader {
    /// Create a new reader over a shared provider.
    pub fn new(
        provider: Arc<dyn Provider + Send + Sync>,
        deployments: DeploymentTable,
        multicall: Address,
    ) -> Self {
        Self {
            provider,
            deployments,
            multicall,
        }
    }

    /// Execute one `aggregate3` batch and unwrap the per-call results.
    ///
    /// Calls are submitted with `allowFailure` set so a failing inner
    /// call surfaces as an error naming the call, not an opaque revert
    /// of the whole batch. Any failure still fails the refresh.
    async fn aggregate(&self, calls: &[BatchCall]) -> Result<Vec<Bytes>> {
        let batch: Vec<Call3> = calls
            .iter()
            .map(|(_, target, data)| Call3 {
                target: *target,
                allowFailure: true,
                callData: Bytes::from(data.clone()),
            })
            .collect();

        let calldata = aggregate3Call { calls: batch }.abi_encode();
        let tx = TransactionRequest::default()
            .to(self.multicall)
            .input(Bytes::from(calldata).into());

        let raw = self
            .provider
            .call(&tx)
            .await
            .context("Multicall aggregate failed")?;

        let decoded = aggregate3Call::abi_decode_returns(&raw, true)
            .context("Multicall response decode failed")?;

        if decoded.returnData.len() != calls.len() {
            return Err(PublisherError::BatchShape {
                expected: calls.len(),
                got: decoded.returnData.len(),
            }
            .into());
        }

        let mut results = Vec::with_capacity(calls.len());
        for ((name, _, _), result) in calls.iter().zip(decoded.returnData) {
            if !result.success {
                return Err(PublisherError::BatchCallFailed { call: *name }.into());
            }
            results.push(result.returnData);
        }
        Ok(results)
    }
}

#[async_trait]
impl SettingsReader for MulticallSettingsReader {
    #[instrument(skip(self))]
    async fn read_settings(
        &self,
        chain_id: u64,
        account: Address,
    ) -> Result<PublisherSettings> {
        // Resolve before anything touches the network: unsupported
        // chains must fail without a single contract call.
        let deployment = self.deployments.resolve(chain_id)?;
        let publisher = deployment.publisher;

        debug!(network = %deployment.name, publisher = %publisher, "Reading publisher settings");

        let publisher_calls: Vec<BatchCall> = vec![
            ("ketherNFT", publisher, ketherNFTCall {}.abi_encode()),
            (
                "ketherSortition",
                publisher,
                ketherSortitionCall {}.abi_encode(),
            ),
            (
                "publishTimeout",
                publisher,
                publishTimeoutCall {}.abi_encode(),
            ),
            (
                "publishFeeToken",
                publisher,
                publishFeeTokenCall {}.abi_encode(),
            ),
            (
                "publishFeeAmount",
                publisher,
                publishFeeAmountCall {}.abi_encode(),
            ),
            (
                "isApprovedForAll",
                publisher,
                isApprovedForAllCall {
                    owner: account,
                    operator: publisher,
                }
                .abi_encode(),
            ),
        ];
        let results = self.aggregate(&publisher_calls).await?;
        let contract = decode_publisher_batch(&results)?;

        // The caller's balance and sortition flag live on the token
        // contract, whose address the first batch just resolved.
        let token_calls: Vec<BatchCall> = vec![
            (
                "balanceOf",
                contract.token,
                balanceOfCall { owner: account }.abi_encode(),
            ),
            (
                "isApprovedForAll",
                contract.token,
                isApprovedForAllCall {
                    owner: account,
                    operator: contract.sortition,
                }
                .abi_encode(),
            ),
        ];
        let results = self.aggregate(&token_calls).await?;
        let caller = decode_token_batch(&results)?;

        let settings = PublisherSettings {
            chain_id,
            publisher,
            token: contract.token,
            sortition: contract.sortition,
            publish_timeout: contract.publish_timeout,
            fee_token: contract.fee_token,
            fee_amount: contract.fee_amount,
            publisher_approved: contract.publisher_approved,
            sortition_approved: caller.sortition_approved,
            token_balance: caller.token_balance,
            account,
        };

        info!(
            network = %deployment.name,
            token = %settings.token,
            sortition = %settings.sortition,
            fee_enabled = settings.fee_enabled(),
            "Settings snapshot read"
        );

        Ok(settings)
    }
}

/// Decode the publisher batch results, positionally.
fn decode_publisher_batch(results: &[Bytes]) -> Result<PublisherBatch> {
    if results.len() != 6 {
        return Err(PublisherError::BatchShape {
            expected: 6,
            got: results.len(),
        }
        .into());
    }

    Ok(PublisherBatch {
        token: ketherNFTCall::abi_decode_returns(&results[0], true)
            .context("Failed to decode ketherNFT result")?
            ._0,
        sortition: ketherSortitionCall::abi_decode_returns(&results[1], true)
            .context("Failed to decode ketherSortition result")?
            ._0,
        publish_timeout: publishTimeoutCall::abi_decode_returns(&results[2], true)
            .context("Failed to decode publishTimeout result")?
            ._0,
        fee_token: publishFeeTokenCall::abi_decode_returns(&results[3], true)
            .context("Failed to decode publishFeeToken result")?
            ._0,
        fee_amount: publishFeeAmountCall::abi_decode_returns(&results[4], true)
            .context("Failed to decode publishFeeAmount result")?
            ._0,
        publisher_approved: isApprovedForAllCall::abi_decode_returns(&results[5], true)
            .context("Failed to decode isApprovedForAll result")?
            ._0,
    })
}

/// Decode the token batch results, positionally.
fn decode_token_batch(results: &[Bytes]) -> Result<TokenBatch> {
    if results.len() != 2 {
        return Err(PublisherError::BatchShape {
            expected: 2,
            got: results.len(),
        }
        .into());
    }

    Ok(TokenBatch {
        token_balance: balanceOfCall::abi_decode_returns(&results[0], true)
            .context("Failed to decode balanceOf result")?
            ._0,
        sortition_approved: isApprovedForAllCall::abi_decode_returns(&results[1], true)
            .context("Failed to decode isApprovedForAll result")?
            ._0,
    })
}
