//! Report Types
//!
//! Per-step time series and end-of-run tallies produced by a simulation run.

use serde::{Deserialize, Serialize};

/// Generates a report ID for the given seed.
pub fn generate_report_id(seed: u64) -> String {
    format!("report_{:06}", seed)
}

/// Why the driver loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Every information item went inactive
    Inactivity,
    /// The step cap was reached first
    Timeout,
}

/// Counts taken after one engine step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepSnapshot {
    pub time: u64,
    pub active_items: usize,
    pub inactive_items: usize,
    pub positive_sentiments: usize,
    pub negative_sentiments: usize,
}

/// How one entity handled the information it received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityTally {
    pub entity_id: usize,
    pub received: usize,
    pub consulted: usize,
    pub positive: usize,
    pub negative: usize,
}

/// Sentiment totals for one information item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemTally {
    pub item_id: u64,
    pub positive: usize,
    pub negative: usize,
}

/// Items sharing the best score for one sentiment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentimentLeaders {
    pub item_ids: Vec<u64>,
    pub score: usize,
}

/// Summary of a complete run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub network_id: u32,
    pub consultation_window: u32,
    pub max_steps: u64,
    pub steps_run: u64,
    pub final_time: u64,
    pub stop_reason: StopReason,
    #[serde(default)]
    pub history: Vec<StepSnapshot>,
    #[serde(default)]
    pub entity_tallies: Vec<EntityTally>,
    #[serde(default)]
    pub item_tallies: Vec<ItemTally>,
    #[serde(default)]
    pub most_positive: SentimentLeaders,
    #[serde(default)]
    pub most_negative: SentimentLeaders,
}

impl SimulationReport {
    /// Last recorded step, if any step ran
    pub fn last_step(&self) -> Option<&StepSnapshot> {
        self.history.last()
    }
}
