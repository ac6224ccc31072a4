//! Information Diffusion Simulation Library
//!
//! Models how pieces of information spread through a randomly generated
//! social network. Every step injects a new item at a random entity and
//! propagates all active items; a driver repeats steps until everything has
//! gone inactive or a step cap is reached.
//!
//! The simulation is a deterministic function of its random stream: seed one
//! [`rand::rngs::SmallRng`], generate the network with it, then hand it to the
//! engine.

pub mod components;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod output;
pub mod setup;
pub mod systems;

pub use components::*;
pub use config::Config;
pub use driver::{simulate_until_stable, Driver, DriverState, RunOutcome};
pub use engine::{DiffusionEngine, StepSummary};
pub use error::{ConfigError, DiffusionError};
pub use output::StatsCollector;
pub use setup::{build_network, generate_network, EntityProfile};
