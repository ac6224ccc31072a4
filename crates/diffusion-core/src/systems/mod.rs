//! Simulation Systems
//!
//! Per-step state transitions applied by the engine.

pub mod propagation;

pub use propagation::{propagate_item, PassSummary};
