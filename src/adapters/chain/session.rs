//! Wallet Session - Local Signer and Session Event Watcher
//!
//! Loads the signing key from the environment (never from config or
//! disk) and implements the `WalletEvents` port: a background task
//! polls the endpoint's chain id and emits one event per observed
//! change. Consecutive identical observations emit nothing, which
//! gives subscribers single-invocation-per-change semantics.

use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::Address;
use alloy::providers::Provider;
use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::ports::wallet::{WalletEvent, WalletEvents};

/// Environment variable holding the session's signing key.
pub const WALLET_KEY_ENV: &str = "PUBLISHER_WALLET_KEY";

/// Load the session signer from the environment.
pub fn load_signer() -> Result<PrivateKeySigner> {
    let key = std::env::var(WALLET_KEY_ENV)
        .with_context(|| format!("{WALLET_KEY_ENV} not set"))?;
    key.trim()
        .parse()
        .with_context(|| format!("Invalid {WALLET_KEY_ENV}"))
}

/// Emits wallet session events from a background chain-id poll.
pub struct SessionWatcher {
    events: mpsc::Receiver<WalletEvent>,
}

impl SessionWatcher {
    /// Spawn the polling task and return the subscription handle.
    ///
    /// The first event is always `Connected` with the chain and
    /// account observed at startup; afterwards only changes are
    /// emitted. A poll failure is logged and skipped — the session
    /// keeps the last known chain until the endpoint answers again.
    pub fn spawn(
        provider: Arc<dyn Provider + Send + Sync>,
        account: Address,
        initial_chain: u64,
        poll_interval: Duration,
    ) -> Self {
        let (tx, events) = mpsc::channel(8);

        tokio::spawn(async move {
            if tx
                .send(WalletEvent::Connected {
                    chain_id: initial_chain,
                    account,
                })
                .await
                .is_err()
            {
                return;
            }

            let mut last_chain = initial_chain;
            loop {
                tokio::time::sleep(poll_interval).await;

                match provider.get_chain_id().await {
                    Ok(chain_id) if chain_id != last_chain => {
                        info!(from = last_chain, to = chain_id, "Network change detected");
                        last_chain = chain_id;
                        if tx.send(WalletEvent::NetworkChanged(chain_id)).await.is_err() {
                            break;
                        }
                    }
                    // Unchanged: emit nothing, by the dedup guarantee.
                    Ok(_) => {}
                    Err(e) => warn!(error = %e, "Chain id poll failed"),
                }
            }
        });

        Self { events }
    }
}

#[async_trait]
impl WalletEvents for SessionWatcher {
    async fn next_event(&mut self) -> Option<WalletEvent> {
        self.events.recv().await
    }
}
