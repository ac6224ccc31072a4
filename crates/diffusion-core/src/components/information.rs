//! Information Components
//!
//! One unit of information and its per-entity propagation records.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::entity::EntityId;

/// State of one (information, entity) pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// The entity can still consult the information
    Viewable,
    /// The entity consulted it
    Consulted,
    /// The consultation window ran out
    Unreachable,
}

impl RecordStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RecordStatus::Viewable)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Viewable => "viewable",
            RecordStatus::Consulted => "consulted",
            RecordStatus::Unreachable => "unreachable",
        }
    }
}

/// How the holding entity reacted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    #[default]
    Pending,
    Positive,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Pending => "pending",
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
        }
    }
}

/// Whole-item status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    Active,
    Inactive,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Inactive => "inactive",
        }
    }
}

/// One entity's copy of an information item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub network_id: u32,
    pub entity_id: EntityId,
    pub status: RecordStatus,
    /// Passes spent viewable, never reset
    pub viewable_steps: u32,
    pub sentiment: Sentiment,
}

impl Record {
    /// A freshly delivered record
    pub fn viewable(network_id: u32, entity_id: EntityId) -> Self {
        Self {
            network_id,
            entity_id,
            status: RecordStatus::Viewable,
            viewable_steps: 0,
            sentiment: Sentiment::Pending,
        }
    }

    pub fn is_viewable(&self) -> bool {
        self.status == RecordStatus::Viewable
    }
}

/// A piece of information spreading through the network
///
/// Holds at most one record per entity. Records are only appended by the
/// propagation pass, and an inactive item is never modified again.
#[derive(Debug, Clone)]
pub struct InformationItem {
    pub(crate) id: u64,
    pub(crate) time_in_network: u64,
    pub(crate) status: ItemStatus,
    pub(crate) consulted_count: usize,
    pub(crate) records: Vec<Record>,
}

impl InformationItem {
    /// Create an item introduced at step `id`, held by a single entity
    pub fn seeded(id: u64, seed: Record) -> Self {
        Self {
            id,
            time_in_network: 0,
            status: ItemStatus::Active,
            consulted_count: 0,
            records: vec![seed],
        }
    }

    /// Step at which the item was introduced
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn time_in_network(&self) -> u64 {
        self.time_in_network
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == ItemStatus::Active
    }

    /// Records that reached `consulted`, accumulated over the item's lifetime
    pub fn consulted_count(&self) -> usize {
        self.consulted_count
    }

    /// Records in delivery order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record_for(&self, entity_id: EntityId) -> Option<&Record> {
        self.records.iter().find(|r| r.entity_id == entity_id)
    }

    /// Entities already holding this item
    pub fn holders(&self) -> HashSet<EntityId> {
        self.records.iter().map(|r| r.entity_id).collect()
    }

    /// Number of entities reached so far
    pub fn reach(&self) -> usize {
        self.records.len()
    }

    pub fn viewable_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_viewable()).count()
    }

    /// True once no record is viewable
    pub fn all_terminal(&self) -> bool {
        self.records.iter().all(|r| r.status.is_terminal())
    }

    pub fn sentiment_count(&self, sentiment: Sentiment) -> usize {
        self.records
            .iter()
            .filter(|r| r.sentiment == sentiment)
            .count()
    }
}
