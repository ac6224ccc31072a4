//! Network Generation
//!
//! Places entities at unique positions, draws their behavior, and builds the
//! directed connectivity relation.

use rand::Rng;
use std::collections::HashSet;

use crate::components::entity::{Behavior, Entity, Position};
use crate::components::network::{Bounds, Network};
use crate::error::DiffusionError;

/// Random draws allowed per entity before falling back to the free-cell list
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1_000;

/// Description of one entity to build
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityProfile {
    /// Drawn at random when not supplied
    pub position: Option<Position>,
    pub behavior: Behavior,
}

impl EntityProfile {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            position: None,
            behavior,
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

/// Check that `size` entities fit at distinct positions inside `bounds`
pub fn check_feasible(size: usize, bounds: Bounds) -> Result<(), DiffusionError> {
    if size == 0 {
        return Err(DiffusionError::invalid("network size must be at least 1"));
    }
    if size as u128 > bounds.capacity() {
        return Err(DiffusionError::invalid(format!(
            "{} entities do not fit in {} unique positions of a {}x{} region",
            size,
            bounds.capacity(),
            bounds.width,
            bounds.height
        )));
    }
    Ok(())
}

/// Generate a network of `size` entities with random positions and behavior
///
/// For each entity the position is drawn first, then its four probabilities;
/// connectivity is drawn after every entity exists.
pub fn generate_network<R: Rng + ?Sized>(
    id: u32,
    size: usize,
    bounds: Bounds,
    rng: &mut R,
) -> Result<Network, DiffusionError> {
    check_feasible(size, bounds)?;

    let mut taken = HashSet::with_capacity(size);
    let mut entities = Vec::with_capacity(size);
    for index in 0..size {
        let position = place_entity(bounds, &taken, rng);
        taken.insert(position);
        let behavior = Behavior::random(rng);
        entities.push(Entity::new(index, position, behavior));
    }

    connect_entities(&mut entities, rng);

    tracing::debug!(
        network_id = id,
        size,
        width = bounds.width,
        height = bounds.height,
        "Generated network"
    );
    Ok(Network::from_entities(id, bounds, entities))
}

/// Build a network from explicit profiles
///
/// Supplied positions are reserved before any random placement so that
/// drawn positions never collide with them.
pub fn build_network<R: Rng + ?Sized>(
    id: u32,
    bounds: Bounds,
    profiles: &[EntityProfile],
    rng: &mut R,
) -> Result<Network, DiffusionError> {
    check_feasible(profiles.len(), bounds)?;

    let mut taken = HashSet::with_capacity(profiles.len());
    for profile in profiles {
        profile.behavior.validate()?;
        if let Some(position) = profile.position {
            if !bounds.contains(position) {
                return Err(DiffusionError::invalid(format!(
                    "position ({}, {}) is outside the {}x{} region",
                    position.x, position.y, bounds.width, bounds.height
                )));
            }
            if !taken.insert(position) {
                return Err(DiffusionError::invalid(format!(
                    "position ({}, {}) is supplied more than once",
                    position.x, position.y
                )));
            }
        }
    }

    let mut entities = Vec::with_capacity(profiles.len());
    for (index, profile) in profiles.iter().enumerate() {
        let position = match profile.position {
            Some(position) => position,
            None => {
                let position = place_entity(bounds, &taken, rng);
                taken.insert(position);
                position
            }
        };
        entities.push(Entity::new(index, position, profile.behavior));
    }

    connect_entities(&mut entities, rng);
    Ok(Network::from_entities(id, bounds, entities))
}

/// Draw a position not in `taken`
///
/// Rejection-samples up to [`MAX_PLACEMENT_ATTEMPTS`] times, then picks
/// uniformly among the remaining free cells. Callers guarantee at least one
/// free cell.
fn place_entity<R: Rng + ?Sized>(
    bounds: Bounds,
    taken: &HashSet<Position>,
    rng: &mut R,
) -> Position {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = random_position(bounds, rng);
        if !taken.contains(&candidate) {
            return candidate;
        }
    }

    let free: Vec<Position> = (0..=bounds.width)
        .flat_map(|x| (0..=bounds.height).map(move |y| Position::new(x, y)))
        .filter(|p| !taken.contains(p))
        .collect();
    tracing::debug!(
        free = free.len(),
        "Placement fell back to free-cell selection"
    );
    free[rng.gen_range(0..free.len())]
}

fn random_position<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Position {
    Position::new(
        rng.gen_range(0..=bounds.width),
        rng.gen_range(0..=bounds.height),
    )
}

/// For every ordered pair (a, b) with a != b, link a -> b with a's
/// connection probability
fn connect_entities<R: Rng + ?Sized>(entities: &mut [Entity], rng: &mut R) {
    let count = entities.len();
    for from in 0..count {
        let probability = entities[from].connection_probability();
        for to in 0..count {
            if from != to && rng.gen::<f64>() < probability {
                entities[from].outgoing.push(to);
            }
        }
    }
}
