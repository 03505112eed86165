//! Wallet Events Port - Explicit Session Event Subscription
//!
//! Replaces implicit wallet-library callbacks with an explicit
//! subscription: the orchestrator pulls events and is invoked exactly
//! once per change. Implementations must suppress consecutive
//! duplicates so a repeated poll of the same state emits nothing.

use alloy::primitives::Address;
use async_trait::async_trait;

/// A change in the wallet session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletEvent {
    /// Session established; carries the initial chain and account.
    Connected { chain_id: u64, account: Address },
    /// The signing account changed.
    AccountChanged(Address),
    /// The active chain changed.
    NetworkChanged(u64),
}

/// Trait for consuming wallet session events.
///
/// `next_event` yields each change exactly once, in order. `None`
/// means the session ended and no further events will arrive.
#[async_trait]
pub trait WalletEvents: Send {
    /// Wait for the next session event.
    async fn next_event(&mut self) -> Option<WalletEvent>;
}
