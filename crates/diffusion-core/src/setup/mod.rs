//! Network Setup
//!
//! Entity placement and connectivity generation.

pub mod network;

pub use network::*;
