//! Entity Components
//!
//! A network member: fixed behavioral probabilities, a position, and the
//! directed connections built alongside its network.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DiffusionError;

/// Index of an entity inside its network
pub type EntityId = usize;

/// A point in the placement region, inclusive of the bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Behavioral probabilities - fixed at creation
/// All values are 0.0 to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Behavior {
    /// Chance of linking to each other entity, and of forwarding along a link
    pub connection: f64,
    /// Chance of consulting a viewable information on a given step
    pub consultation: f64,
    /// Chance of reacting positively each time a viewable information is evaluated
    pub appreciation: f64,
    /// Drawn with the others but not used by propagation
    pub forward: f64,
}

impl Behavior {
    pub fn new(connection: f64, consultation: f64, appreciation: f64, forward: f64) -> Self {
        Self {
            connection,
            consultation,
            appreciation,
            forward,
        }
    }

    /// Draw all four probabilities uniformly from [0, 1)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            connection: rng.gen(),
            consultation: rng.gen(),
            appreciation: rng.gen(),
            forward: rng.gen(),
        }
    }

    /// Reject values outside [0, 1]
    pub fn validate(&self) -> Result<(), DiffusionError> {
        let fields = [
            ("connection", self.connection),
            ("consultation", self.consultation),
            ("appreciation", self.appreciation),
            ("forward", self.forward),
        ];
        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(DiffusionError::invalid(format!(
                    "{} probability {} is outside [0, 1]",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Audience group, derived from the appreciation probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    Favorable,
    Unfavorable,
}

impl Group {
    pub fn from_appreciation(appreciation: f64) -> Self {
        if appreciation > 0.5 {
            Group::Favorable
        } else {
            Group::Unfavorable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Favorable => "favorable",
            Group::Unfavorable => "unfavorable",
        }
    }
}

/// A member of a network
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    behavior: Behavior,
    group: Group,
    position: Position,
    pub(crate) outgoing: Vec<EntityId>,
}

impl Entity {
    /// Connections are filled in by network construction
    pub(crate) fn new(id: EntityId, position: Position, behavior: Behavior) -> Self {
        Self {
            id,
            behavior,
            group: Group::from_appreciation(behavior.appreciation),
            position,
            outgoing: Vec::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn connection_probability(&self) -> f64 {
        self.behavior.connection
    }

    pub fn consultation_probability(&self) -> f64 {
        self.behavior.consultation
    }

    pub fn appreciation_probability(&self) -> f64 {
        self.behavior.appreciation
    }

    pub fn forward_probability(&self) -> f64 {
        self.behavior.forward
    }

    /// Entities this one can forward information to, in ascending id order
    pub fn outgoing_connections(&self) -> &[EntityId] {
        &self.outgoing
    }

    pub fn is_connected_to(&self, other: EntityId) -> bool {
        self.outgoing.contains(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_group_threshold() {
        assert_eq!(Group::from_appreciation(0.51), Group::Favorable);
        assert_eq!(Group::from_appreciation(0.5), Group::Unfavorable);
        assert_eq!(Group::from_appreciation(0.0), Group::Unfavorable);
    }

    #[test]
    fn test_entity_group_follows_behavior() {
        let entity = Entity::new(0, Position::new(1, 2), Behavior::new(0.1, 0.2, 0.9, 0.4));
        assert_eq!(entity.group(), Group::Favorable);
        assert_eq!(entity.group().as_str(), "favorable");
        assert!(entity.outgoing_connections().is_empty());
    }

    #[test]
    fn test_random_behavior_in_unit_interval() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let behavior = Behavior::random(&mut rng);
            assert!(behavior.validate().is_ok());
            assert!(behavior.connection < 1.0);
            assert!(behavior.forward < 1.0);
        }
    }

    #[test]
    fn test_behavior_validation_rejects_out_of_range() {
        assert!(Behavior::new(1.0, 0.0, 1.0, 0.0).validate().is_ok());
        assert!(Behavior::new(1.2, 0.0, 0.5, 0.5).validate().is_err());
        assert!(Behavior::new(0.5, -0.1, 0.5, 0.5).validate().is_err());
        assert!(Behavior::new(0.5, 0.5, f64::NAN, 0.5).validate().is_err());
    }
}
