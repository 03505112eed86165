//! Approval Actions and Pending Transactions
//!
//! Names the three write operations the console can submit and the
//! state carried for a submitted-but-not-yet-included transaction.

use std::fmt;

use alloy::primitives::{Address, TxHash, U256};

/// One of the three approval write operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalAction {
    /// `approve(to, tokenId)` — single-token approval.
    Approve { to: Address, token_id: U256 },
    /// `setApprovalForAll(operator, approved)` — operator flag.
    SetApprovalForAll { operator: Address, approved: bool },
    /// Convenience: approve the publisher contract itself as operator.
    ApprovePublisher,
}

impl fmt::Display for ApprovalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approve { to, token_id } => {
                write!(f, "approve({to}, {token_id})")
            }
            Self::SetApprovalForAll { operator, approved } => {
                write!(f, "setApprovalForAll({operator}, {approved})")
            }
            Self::ApprovePublisher => write!(f, "approvePublisher()"),
        }
    }
}

/// A submitted transaction awaiting inclusion.
///
/// Exists from submission until the watcher reports inclusion,
/// then is discarded.
#[derive(Debug, Clone)]
pub struct PendingTx {
    /// Transaction hash returned at submission.
    pub hash: TxHash,
    /// The action that produced it.
    pub action: ApprovalAction,
}

/// Terminal state of a watched transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InclusionStatus {
    /// Included and executed successfully.
    Confirmed { block: u64 },
    /// Included but reverted.
    Reverted,
}
