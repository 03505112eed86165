//! Chain Adapters - On-chain Interaction Layer
//!
//! Provides on-chain access via alloy-rs 0.9 for:
//! - RPC provider management with a wallet filler for signing
//! - Batched settings reads through Multicall3
//! - Approval write submission (approve, setApprovalForAll)
//! - Receipt polling for transaction inclusion
//! - Wallet session events (connect, network change)

pub mod approvals;
pub mod bindings;
pub mod deployments;
pub mod provider;
pub mod session;
pub mod settings;
pub mod watcher;

pub use approvals::PublisherApprovals;
pub use deployments::{Deployment, DeploymentTable};
pub use provider::EvmProvider;
pub use session::SessionWatcher;
pub use settings::MulticallSettingsReader;
pub use watcher::ReceiptWatcher;
