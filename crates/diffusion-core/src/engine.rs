//! Diffusion Engine
//!
//! Owns the network, every information item ever introduced, and the random
//! source. Each step injects one new item and propagates all active ones.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::components::entity::EntityId;
use crate::components::information::{InformationItem, Record};
use crate::components::network::Network;
use crate::error::DiffusionError;
use crate::systems::propagate_item;

/// Default number of passes a record may stay viewable unconsulted
pub const DEFAULT_CONSULTATION_WINDOW: u32 = 3;

/// Totals for one engine step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepSummary {
    /// Id of the item injected this step
    pub injected_item: u64,
    /// Entity that received the injected item
    pub seed_entity: EntityId,
    /// Items propagated this step
    pub propagated: usize,
    pub forwarded: usize,
    pub consulted: usize,
    pub expired: usize,
    pub deactivated: usize,
}

/// The simulation over one network
pub struct DiffusionEngine<R = SmallRng> {
    time: u64,
    consultation_window: u32,
    network: Network,
    items: Vec<InformationItem>,
    rng: R,
}

impl<R: Rng> DiffusionEngine<R> {
    /// Create an engine at time 0 with no items
    ///
    /// `rng` should be the same stream that generated `network`, handed over
    /// after construction.
    pub fn new(network: Network, consultation_window: u32, rng: R) -> Result<Self, DiffusionError> {
        if network.is_empty() {
            return Err(DiffusionError::invalid(
                "cannot inject information into an empty network",
            ));
        }
        Ok(Self {
            time: 0,
            consultation_window,
            network,
            items: Vec::new(),
            rng,
        })
    }

    /// Advance global time by one step
    pub fn step(&mut self) -> StepSummary {
        let seed_entity = self.rng.gen_range(0..self.network.len());
        let injected_item = self.time;
        self.items.push(InformationItem::seeded(
            injected_item,
            Record::viewable(self.network.id(), seed_entity),
        ));
        self.time += 1;

        let mut summary = StepSummary {
            injected_item,
            seed_entity,
            ..StepSummary::default()
        };

        for item in self.items.iter_mut().filter(|item| item.is_active()) {
            let pass = propagate_item(
                item,
                &self.network,
                self.consultation_window,
                &mut self.rng,
            );
            summary.propagated += 1;
            summary.forwarded += pass.forwarded;
            summary.consulted += pass.consulted;
            summary.expired += pass.expired;
            if pass.deactivated {
                summary.deactivated += 1;
            }
        }

        tracing::debug!(
            time = self.time,
            seed_entity,
            propagated = summary.propagated,
            forwarded = summary.forwarded,
            deactivated = summary.deactivated,
            active = self.active_count(),
            "Engine step"
        );
        summary
    }
}

impl<R> DiffusionEngine<R> {
    /// Steps taken so far
    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn consultation_window(&self) -> u32 {
        self.consultation_window
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Every item ever introduced, in introduction order
    pub fn items(&self) -> &[InformationItem] {
        &self.items
    }

    /// Items are ids of the step they were introduced at
    pub fn item(&self, id: u64) -> Option<&InformationItem> {
        usize::try_from(id).ok().and_then(|index| self.items.get(index))
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_active()).count()
    }

    pub fn inactive_count(&self) -> usize {
        self.items.len() - self.active_count()
    }

    /// True once at least one item exists and none is active
    pub fn all_inactive(&self) -> bool {
        !self.items.is_empty() && self.active_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Behavior;
    use crate::components::network::Bounds;
    use crate::setup::{build_network, generate_network, EntityProfile};
    use rand::SeedableRng;

    fn engine(size: usize, seed: u64, window: u32) -> DiffusionEngine {
        let mut rng = SmallRng::seed_from_u64(seed);
        let network = generate_network(1, size, Bounds::default(), &mut rng).unwrap();
        DiffusionEngine::new(network, window, rng).unwrap()
    }

    #[test]
    fn test_new_engine_is_empty() {
        let engine = engine(10, 42, DEFAULT_CONSULTATION_WINDOW);
        assert_eq!(engine.time(), 0);
        assert!(engine.items().is_empty());
        assert!(!engine.all_inactive());
        assert_eq!(engine.consultation_window(), 3);
    }

    #[test]
    fn test_step_injects_item_with_time_id() {
        let mut engine = engine(10, 42, 3);
        for expected in 0..5u64 {
            let summary = engine.step();
            assert_eq!(summary.injected_item, expected);
            assert_eq!(engine.time(), expected + 1);
            assert_eq!(engine.items().len() as u64, expected + 1);
            assert_eq!(engine.item(expected).map(|i| i.id()), Some(expected));
        }
    }

    #[test]
    fn test_injected_item_propagated_same_step() {
        let mut engine = engine(10, 8, 3);
        let summary = engine.step();

        let item = engine.item(0).unwrap();
        assert_eq!(item.time_in_network(), 1);
        assert_eq!(item.records()[0].entity_id, summary.seed_entity);
        assert_eq!(item.records()[0].viewable_steps, 1);
        assert_eq!(summary.propagated, 1);
    }

    #[test]
    fn test_isolated_entity_expires_after_window() {
        let mut rng = SmallRng::seed_from_u64(1);
        let profiles = [EntityProfile::new(Behavior::new(0.0, 0.0, 0.5, 0.0))];
        let network = build_network(1, Bounds::default(), &profiles, &mut rng).unwrap();
        let mut engine = DiffusionEngine::new(network, 4, rng).unwrap();

        for _ in 0..4 {
            engine.step();
        }
        let first = engine.item(0).unwrap();
        assert!(!first.is_active());
        assert_eq!(first.time_in_network(), 4);
        assert_eq!(engine.active_count(), 3);
        assert_eq!(engine.inactive_count(), 1);
    }

    #[test]
    fn test_item_lookup_out_of_range() {
        let mut engine = engine(3, 2, 3);
        engine.step();
        assert!(engine.item(1).is_none());
        assert!(engine.item(u64::MAX).is_none());
    }
}
