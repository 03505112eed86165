//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the orchestrator requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `SettingsReader`: batched read of the publisher contract's settings
//! - `ApprovalSubmitter`: the three approval write operations
//! - `InclusionWatcher`: wait for a submitted transaction's inclusion
//! - `WalletEvents`: explicit wallet session event subscription

pub mod approvals;
pub mod settings_reader;
pub mod tx_watcher;
pub mod wallet;
