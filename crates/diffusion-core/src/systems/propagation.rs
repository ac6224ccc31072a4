//! Propagation System
//!
//! Advances one information item by a single pass: sentiment, forwarding,
//! consultation and expiry for every record that was viewable when the pass
//! began, then the deactivation check.

use rand::Rng;

use crate::components::information::{
    InformationItem, ItemStatus, Record, RecordStatus, Sentiment,
};
use crate::components::network::Network;

/// What happened to an item during one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassSummary {
    /// Records that were viewable at the start of the pass
    pub evaluated: usize,
    /// New records delivered to entities that did not hold the item
    pub forwarded: usize,
    pub consulted: usize,
    pub expired: usize,
    /// The item went inactive at the end of this pass
    pub deactivated: bool,
}

/// Run one propagation pass over `item`
///
/// Inactive items are left untouched. Records forwarded during the pass are
/// appended after the scan, so they are not advanced until the next pass,
/// but they do count in the deactivation check.
pub fn propagate_item<R: Rng + ?Sized>(
    item: &mut InformationItem,
    network: &Network,
    consultation_window: u32,
    rng: &mut R,
) -> PassSummary {
    let mut summary = PassSummary::default();
    if item.status == ItemStatus::Inactive {
        return summary;
    }

    item.time_in_network += 1;

    let mut holders = item.holders();
    let mut forwarded: Vec<Record> = Vec::new();

    for record in item.records.iter_mut() {
        if record.status != RecordStatus::Viewable {
            continue;
        }
        let Some(entity) = network.entity(record.entity_id) else {
            tracing::warn!(
                item_id = item.id,
                entity_id = record.entity_id,
                "Record refers to an entity outside the network"
            );
            continue;
        };

        summary.evaluated += 1;
        record.viewable_steps += 1;

        // Re-drawn on every pass while viewable; the last pass wins.
        record.sentiment = if rng.gen::<f64>() < entity.appreciation_probability() {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        };

        for &target in entity.outgoing_connections() {
            if holders.contains(&target) {
                continue;
            }
            if rng.gen::<f64>() < entity.connection_probability() {
                tracing::trace!(
                    item_id = item.id,
                    from = entity.id(),
                    to = target,
                    "Forwarded information"
                );
                forwarded.push(Record::viewable(network.id(), target));
                holders.insert(target);
            }
        }

        if rng.gen::<f64>() < entity.consultation_probability() {
            record.status = RecordStatus::Consulted;
            summary.consulted += 1;
        }

        if record.viewable_steps >= consultation_window && record.status != RecordStatus::Consulted
        {
            record.status = RecordStatus::Unreachable;
            summary.expired += 1;
        }
    }

    item.consulted_count += summary.consulted;
    summary.forwarded = forwarded.len();
    item.records.extend(forwarded);

    if item.all_terminal() {
        item.status = ItemStatus::Inactive;
        summary.deactivated = true;
    }

    summary
}
