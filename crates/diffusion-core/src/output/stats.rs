//! Statistics Output
//!
//! Collects per-step counts during a run and builds the end-of-run report.

use diffusion_events::{
    EntityTally, ItemTally, SentimentLeaders, SimulationReport, StepSnapshot, StopReason,
};

use crate::components::information::{RecordStatus, Sentiment};
use crate::driver::RunOutcome;
use crate::engine::DiffusionEngine;

/// Accumulates the time series while the driver runs
#[derive(Debug, Clone, Default)]
pub struct StatsCollector {
    pub history: Vec<StepSnapshot>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record counts after a step
    pub fn record_step<R>(&mut self, engine: &DiffusionEngine<R>) {
        let mut snapshot = StepSnapshot {
            time: engine.time(),
            active_items: engine.active_count(),
            inactive_items: engine.inactive_count(),
            ..StepSnapshot::default()
        };
        for item in engine.items() {
            snapshot.positive_sentiments += item.sentiment_count(Sentiment::Positive);
            snapshot.negative_sentiments += item.sentiment_count(Sentiment::Negative);
        }
        self.history.push(snapshot);
    }

    /// Build the final report
    pub fn generate_report<R>(
        &self,
        engine: &DiffusionEngine<R>,
        outcome: &RunOutcome,
    ) -> SimulationReport {
        let item_tallies = item_tallies(engine);
        let most_positive = leaders(&item_tallies, |t| t.positive);
        let most_negative = leaders(&item_tallies, |t| t.negative);

        SimulationReport {
            network_id: engine.network().id(),
            consultation_window: engine.consultation_window(),
            max_steps: outcome.max_steps,
            steps_run: outcome.steps,
            final_time: engine.time(),
            stop_reason: outcome.state.stop_reason().unwrap_or(StopReason::Timeout),
            history: self.history.clone(),
            entity_tallies: entity_tallies(engine),
            item_tallies,
            most_positive,
            most_negative,
        }
    }
}

/// How each entity handled the items it received, in entity id order
pub fn entity_tallies<R>(engine: &DiffusionEngine<R>) -> Vec<EntityTally> {
    let mut tallies: Vec<EntityTally> = engine
        .network()
        .entities()
        .iter()
        .map(|e| EntityTally {
            entity_id: e.id(),
            ..EntityTally::default()
        })
        .collect();

    for item in engine.items() {
        for record in item.records() {
            let Some(tally) = tallies.get_mut(record.entity_id) else {
                continue;
            };
            tally.received += 1;
            if record.status == RecordStatus::Consulted {
                tally.consulted += 1;
            }
            match record.sentiment {
                Sentiment::Positive => tally.positive += 1,
                Sentiment::Negative => tally.negative += 1,
                Sentiment::Pending => {}
            }
        }
    }
    tallies
}

/// Sentiment totals per item, in item id order
pub fn item_tallies<R>(engine: &DiffusionEngine<R>) -> Vec<ItemTally> {
    engine
        .items()
        .iter()
        .map(|item| ItemTally {
            item_id: item.id(),
            positive: item.sentiment_count(Sentiment::Positive),
            negative: item.sentiment_count(Sentiment::Negative),
        })
        .collect()
}

/// Items sharing the highest score
///
/// The running best starts at 0, so when nothing scores every item ties at 0.
pub fn leaders(tallies: &[ItemTally], score: impl Fn(&ItemTally) -> usize) -> SentimentLeaders {
    let mut best = SentimentLeaders::default();
    for tally in tallies {
        let value = score(tally);
        if value > best.score {
            best.score = value;
            best.item_ids = vec![tally.item_id];
        } else if value == best.score {
            best.item_ids.push(tally.item_id);
        }
    }
    best
}
