//! Scenario tests
//!
//! Small networks with forced probabilities whose outcome does not depend on
//! the random draws.

use info_diffusion::{
    build_network, simulate_until_stable, Behavior, Bounds, DiffusionEngine, DriverState,
    EntityProfile, ItemStatus, RecordStatus, Sentiment,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn engine(profiles: &[EntityProfile], window: u32, seed: u64) -> DiffusionEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let network = build_network(1, Bounds::default(), profiles, &mut rng).unwrap();
    DiffusionEngine::new(network, window, rng).unwrap()
}

/// A single entity that never consults: its record expires after exactly
/// the consultation window
#[test]
fn test_single_entity_expires() {
    let profiles = [EntityProfile::new(Behavior::new(0.8, 0.0, 0.5, 0.5))];
    let mut engine = engine(&profiles, 3, 1);

    for step in 1..=3u32 {
        engine.step();
        let item = engine.item(0).unwrap();
        assert_eq!(item.records().len(), 1);
        assert_eq!(item.records()[0].viewable_steps, step);
        let expected = if step < 3 {
            RecordStatus::Viewable
        } else {
            RecordStatus::Unreachable
        };
        assert_eq!(item.records()[0].status, expected);
    }

    let item = engine.item(0).unwrap();
    assert_eq!(item.status(), ItemStatus::Inactive);
    assert_eq!(item.time_in_network(), 3);
}

/// A single entity that always consults: consulted on the first pass
#[test]
fn test_single_entity_consults() {
    let profiles = [EntityProfile::new(Behavior::new(0.8, 1.0, 1.0, 0.5))];
    let mut engine = engine(&profiles, 3, 1);
    engine.step();

    let item = engine.item(0).unwrap();
    assert_eq!(item.records()[0].status, RecordStatus::Consulted);
    assert_eq!(item.records()[0].sentiment, Sentiment::Positive);
    assert_eq!(item.consulted_count(), 1);
    assert_eq!(item.status(), ItemStatus::Inactive);
}

/// Window 0: every record is unreachable after its first pass unless
/// consulted in that pass
#[test]
fn test_zero_window_expires_immediately() {
    let profiles = vec![EntityProfile::new(Behavior::new(1.0, 0.0, 0.5, 0.5)); 4];
    let mut engine = engine(&profiles, 0, 3);

    engine.step();
    let item = engine.item(0).unwrap();
    assert_eq!(item.records()[0].status, RecordStatus::Unreachable);
    assert!(item.records()[1..]
        .iter()
        .all(|r| r.status == RecordStatus::Viewable && r.viewable_steps == 0));

    engine.step();
    let item = engine.item(0).unwrap();
    assert!(item
        .records()
        .iter()
        .all(|r| r.status == RecordStatus::Unreachable));
    assert_eq!(item.status(), ItemStatus::Inactive);
}

/// Full connectivity: one step saturates the network from the seed entity
#[test]
fn test_full_connectivity_saturates_in_one_step() {
    let profiles = vec![EntityProfile::new(Behavior::new(1.0, 0.0, 0.5, 0.5)); 5];
    let mut engine = engine(&profiles, 3, 42);

    for entity in engine.network().entities() {
        assert_eq!(entity.outgoing_connections().len(), 4);
    }

    let summary = engine.step();
    let item = engine.item(0).unwrap();
    assert_eq!(item.records().len(), 5);
    assert_eq!(summary.forwarded, 4);
    assert_eq!(item.records()[0].entity_id, summary.seed_entity);

    let mut holders: Vec<usize> = item.records().iter().map(|r| r.entity_id).collect();
    holders.sort_unstable();
    assert_eq!(holders, vec![0, 1, 2, 3, 4]);
    assert!(item.is_active());
}

/// Zero step cap: nothing runs
#[test]
fn test_zero_max_steps() {
    let profiles = vec![EntityProfile::new(Behavior::new(0.5, 0.5, 0.5, 0.5)); 3];
    let mut engine = engine(&profiles, 3, 7);

    let outcome = simulate_until_stable(&mut engine, 0);
    assert_eq!(outcome.steps, 0);
    assert_eq!(outcome.state, DriverState::StoppedByTimeout);
    assert!(engine.items().is_empty());
    assert_eq!(engine.time(), 0);
}

/// Sentiment follows the holding entity's appreciation
#[test]
fn test_sentiment_extremes() {
    let profiles = [
        EntityProfile::new(Behavior::new(1.0, 0.0, 1.0, 0.5)),
        EntityProfile::new(Behavior::new(1.0, 0.0, 0.0, 0.5)),
    ];
    let mut engine = engine(&profiles, 5, 9);
    engine.step();
    engine.step();

    let item = engine.item(0).unwrap();
    for record in item.records() {
        let expected = if record.entity_id == 0 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        };
        assert_eq!(record.sentiment, expected);
    }
}
