//! Core data model: entities, the network, and information items.

pub mod entity;
pub mod information;
pub mod network;

pub use entity::{Behavior, Entity, EntityId, Group, Position};
pub use information::{InformationItem, ItemStatus, Record, RecordStatus, Sentiment};
pub use network::{Bounds, Network};
