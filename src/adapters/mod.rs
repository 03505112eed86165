//! Adapters Layer - Implementations of the Ports
//!
//! - `chain`: alloy-rs adapters for reads, writes, inclusion, session
//! - `console`: terminal presentation (rendering and command parsing)

pub mod chain;
pub mod console;
