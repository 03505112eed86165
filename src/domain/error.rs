//! Error Taxonomy
//!
//! Typed errors for the failure classes the console distinguishes.
//! Write-submission and inclusion-wait failures stay as the transport
//! layer's own errors and are surfaced verbatim; only the cases the
//! console itself detects get variants here.

use thiserror::Error;

/// Errors raised by the console's own checks.
#[derive(Debug, Error)]
pub enum PublisherError {
    /// The active chain has no entry in the deployment table.
    #[error("unsupported chain: no publisher deployment for chain id {chain_id}")]
    UnsupportedChain { chain_id: u64 },

    /// A batched read returned a different number of results than requested.
    #[error("batched read returned {got} results, expected {expected}")]
    BatchShape { expected: usize, got: usize },

    /// One call inside a batched read failed on-chain.
    #[error("batched read call {call} failed on-chain")]
    BatchCallFailed { call: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_chain_names_the_chain() {
        let err = PublisherError::UnsupportedChain { chain_id: 31337 };
        assert!(err.to_string().contains("31337"));
    }
}
