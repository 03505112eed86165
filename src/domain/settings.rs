//! Publisher Settings Snapshot
//!
//! The structured record built by one settings read. At most one
//! snapshot is active per session; a refresh replaces it wholesale,
//! never field-by-field.

use alloy::primitives::{Address, U256};

/// Snapshot of the publisher contract's settings for one account.
///
/// Field order mirrors the batched read that produces it: contract-level
/// getters first, then the caller's approval flags and token balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherSettings {
    /// Chain the snapshot was read on.
    pub chain_id: u64,
    /// Deployed publisher contract address.
    pub publisher: Address,
    /// Underlying token contract wrapped by the publisher.
    pub token: Address,
    /// Sortition (magistrate) delegate address.
    pub sortition: Address,
    /// Publish timeout, in seconds.
    pub publish_timeout: U256,
    /// Fee token charged per publish (zero address when disabled).
    pub fee_token: Address,
    /// Fee amount charged per publish.
    pub fee_amount: U256,
    /// Whether the caller has approved the publisher contract as operator.
    pub publisher_approved: bool,
    /// Whether the caller has approved the sortition delegate as operator.
    pub sortition_approved: bool,
    /// Caller's balance on the underlying token.
    pub token_balance: U256,
    /// The account the per-caller fields were read for.
    pub account: Address,
}

impl PublisherSettings {
    /// Whether a per-publish fee is currently charged.
    pub fn fee_enabled(&self) -> bool {
        !self.fee_amount.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_enabled() {
        let mut settings = PublisherSettings {
            chain_id: 1,
            publisher: Address::ZERO,
            token: Address::ZERO,
            sortition: Address::ZERO,
            publish_timeout: U256::from(86_400u64),
            fee_token: Address::ZERO,
            fee_amount: U256::ZERO,
            publisher_approved: false,
            sortition_approved: false,
            token_balance: U256::ZERO,
            account: Address::ZERO,
        };
        assert!(!settings.fee_enabled());

        settings.fee_amount = U256::from(1u64);
        assert!(settings.fee_enabled());
    }
}
