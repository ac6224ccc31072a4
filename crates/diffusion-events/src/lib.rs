//! Shared snapshot and report types for the information diffusion simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! Visualization and reporting tools depend on it to read simulation output.

pub mod report;
pub mod snapshot;

// Re-export snapshot types
pub use snapshot::{
    EntitySnapshot, ItemSnapshot, NetworkSnapshot, PositionSnapshot, RecordSnapshot,
};

// Re-export report types
pub use report::{
    generate_report_id, EntityTally, ItemTally, SentimentLeaders, SimulationReport, StepSnapshot,
    StopReason,
};
