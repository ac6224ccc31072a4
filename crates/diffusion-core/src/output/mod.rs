//! Output Generation
//!
//! Snapshots and statistics for external visualization and reporting tools.

pub mod snapshot;
pub mod stats;

pub use snapshot::*;
pub use stats::*;
