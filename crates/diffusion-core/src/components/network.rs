//! Network Components
//!
//! A fixed set of entities at unique positions with directed connectivity.
//! Built once by [`crate::setup`], read-only afterward.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId, Position};

/// Size of the placement region. Coordinates run from 0 to the bound, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of distinct positions available
    ///
    /// Widened to `u128`: a full `u32` square holds 2^64 positions.
    pub fn capacity(&self) -> u128 {
        (self.width as u128 + 1) * (self.height as u128 + 1)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x <= self.width && position.y <= self.height
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
        }
    }
}

/// A social network of entities
#[derive(Debug, Clone)]
pub struct Network {
    id: u32,
    bounds: Bounds,
    entities: Vec<Entity>,
}

impl Network {
    /// Entities must already be indexed by id and connected
    pub(crate) fn from_entities(id: u32, bounds: Bounds, entities: Vec<Entity>) -> Self {
        debug_assert!(entities.iter().enumerate().all(|(i, e)| e.id() == i));
        Self {
            id,
            bounds,
            entities,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in id order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.entities.iter().map(|e| e.outgoing_connections().len()).sum()
    }

    /// Whether the directed edge `from -> to` exists
    pub fn has_edge(&self, from: EntityId, to: EntityId) -> bool {
        self.entity(from).is_some_and(|e| e.is_connected_to(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Behavior;

    #[test]
    fn test_bounds_capacity() {
        assert_eq!(Bounds::default().capacity(), 51 * 51);
        assert_eq!(Bounds::new(0, 0).capacity(), 1);
        assert_eq!(Bounds::new(u32::MAX, 0).capacity(), u32::MAX as u128 + 1);
        assert_eq!(Bounds::new(u32::MAX, u32::MAX).capacity(), 1u128 << 64);
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = Bounds::new(5, 3);
        assert!(bounds.contains(Position::new(5, 3)));
        assert!(bounds.contains(Position::new(0, 0)));
        assert!(!bounds.contains(Position::new(6, 0)));
        assert!(!bounds.contains(Position::new(0, 4)));
    }

    #[test]
    fn test_edge_lookup() {
        let behavior = Behavior::new(0.5, 0.5, 0.5, 0.5);
        let mut a = Entity::new(0, Position::new(0, 0), behavior);
        let b = Entity::new(1, Position::new(1, 0), behavior);
        a.outgoing.push(1);

        let network = Network::from_entities(3, Bounds::default(), vec![a, b]);
        assert_eq!(network.id(), 3);
        assert_eq!(network.edge_count(), 1);
        assert!(network.has_edge(0, 1));
        assert!(!network.has_edge(1, 0));
        assert!(!network.has_edge(9, 0));
    }
}
