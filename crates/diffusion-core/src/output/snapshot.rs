//! Snapshot Generation
//!
//! Converts engine state into the serializable types of `diffusion-events`
//! and writes them as JSON.

use diffusion_events::{
    EntitySnapshot, ItemSnapshot, NetworkSnapshot, PositionSnapshot, RecordSnapshot,
    SimulationReport,
};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::components::entity::Entity;
use crate::components::information::{InformationItem, Record};
use crate::components::network::Network;

pub fn entity_snapshot(entity: &Entity) -> EntitySnapshot {
    let position = entity.position();
    EntitySnapshot {
        entity_id: entity.id(),
        group: entity.group().as_str().to_string(),
        position: PositionSnapshot {
            x: position.x,
            y: position.y,
        },
        connection_probability: entity.connection_probability(),
        consultation_probability: entity.consultation_probability(),
        appreciation_probability: entity.appreciation_probability(),
        forward_probability: entity.forward_probability(),
        outgoing_connections: entity.outgoing_connections().to_vec(),
    }
}

/// Snapshot of every entity with its position and edges
pub fn network_snapshot(network: &Network) -> NetworkSnapshot {
    let bounds = network.bounds();
    NetworkSnapshot {
        network_id: network.id(),
        width: bounds.width,
        height: bounds.height,
        entities: network.entities().iter().map(entity_snapshot).collect(),
    }
}

pub fn record_snapshot(record: &Record) -> RecordSnapshot {
    RecordSnapshot {
        network_id: record.network_id,
        entity_id: record.entity_id,
        status: record.status.as_str().to_string(),
        viewable_steps: record.viewable_steps,
        sentiment: record.sentiment.as_str().to_string(),
    }
}

pub fn item_snapshot(item: &InformationItem) -> ItemSnapshot {
    ItemSnapshot {
        item_id: item.id(),
        status: item.status().as_str().to_string(),
        time_in_network: item.time_in_network(),
        consulted_count: item.consulted_count(),
        records: item.records().iter().map(record_snapshot).collect(),
    }
}

/// Write the run report as pretty JSON
pub fn write_report(path: impl AsRef<Path>, report: &SimulationReport) -> std::io::Result<()> {
    write_json(path.as_ref(), report)
}

/// Write the network snapshot as pretty JSON
pub fn write_network(path: impl AsRef<Path>, snapshot: &NetworkSnapshot) -> std::io::Result<()> {
    write_json(path.as_ref(), snapshot)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(value)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    fs::write(path, json)
}
