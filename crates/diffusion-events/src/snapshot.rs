//! Snapshot Types
//!
//! Serialization structs for the network and for information items.
//!
//! Snapshots are read-only copies of simulation state, taken for plotting
//! nodes/edges and for per-entity tallies.

use serde::{Deserialize, Serialize};

/// A point in the 2D placement region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionSnapshot {
    pub x: u32,
    pub y: u32,
}

/// One network member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub entity_id: usize,
    /// "favorable" or "unfavorable"
    pub group: String,
    pub position: PositionSnapshot,
    pub connection_probability: f64,
    pub consultation_probability: f64,
    pub appreciation_probability: f64,
    pub forward_probability: f64,
    #[serde(default)]
    pub outgoing_connections: Vec<usize>,
}

/// Full network snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub network_id: u32,
    pub width: u32,
    pub height: u32,
    pub entities: Vec<EntitySnapshot>,
}

impl NetworkSnapshot {
    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.entities
            .iter()
            .map(|e| e.outgoing_connections.len())
            .sum()
    }

    /// Find an entity by id
    pub fn entity(&self, entity_id: usize) -> Option<&EntitySnapshot> {
        self.entities.iter().find(|e| e.entity_id == entity_id)
    }
}

/// State of one (information, entity) pairing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    pub network_id: u32,
    pub entity_id: usize,
    /// "viewable", "consulted" or "unreachable"
    pub status: String,
    pub viewable_steps: u32,
    /// "pending", "positive" or "negative"
    pub sentiment: String,
}

/// One information item and its propagation history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub item_id: u64,
    /// "active" or "inactive"
    pub status: String,
    pub time_in_network: u64,
    pub consulted_count: usize,
    #[serde(default)]
    pub records: Vec<RecordSnapshot>,
}

impl ItemSnapshot {
    /// Number of entities the item reached
    pub fn reach(&self) -> usize {
        self.records.len()
    }
}
