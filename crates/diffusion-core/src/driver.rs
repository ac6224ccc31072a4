//! Driver Loop
//!
//! Repeats engine steps until every item has gone inactive or the step cap
//! is reached. Holds no propagation logic of its own.

use diffusion_events::StopReason;
use rand::Rng;

use crate::engine::DiffusionEngine;

/// Default cap on driver steps
pub const DEFAULT_MAX_STEPS: u64 = 20;

/// Driver-level state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    StoppedByInactivity,
    StoppedByTimeout,
}

impl DriverState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DriverState::Running)
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        match self {
            DriverState::Running => None,
            DriverState::StoppedByInactivity => Some(StopReason::Inactivity),
            DriverState::StoppedByTimeout => Some(StopReason::Timeout),
        }
    }
}

/// Result of a complete run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub steps: u64,
    pub max_steps: u64,
    pub state: DriverState,
}

/// Termination policy around [`DiffusionEngine::step`]
#[derive(Debug, Clone)]
pub struct Driver {
    max_steps: u64,
    steps: u64,
    state: DriverState,
}

impl Driver {
    pub fn new(max_steps: u64) -> Self {
        Self {
            max_steps,
            steps: 0,
            state: DriverState::Running,
        }
    }

    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }

    /// Steps performed by this driver
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn outcome(&self) -> RunOutcome {
        RunOutcome {
            steps: self.steps,
            max_steps: self.max_steps,
            state: self.state,
        }
    }

    /// Perform at most one step and update the state
    ///
    /// Inactivity is checked after the step and takes precedence over the
    /// step cap when both hold.
    pub fn advance<R: Rng>(&mut self, engine: &mut DiffusionEngine<R>) -> DriverState {
        if self.state.is_terminal() {
            return self.state;
        }
        if self.steps >= self.max_steps {
            self.stop(DriverState::StoppedByTimeout);
            return self.state;
        }

        engine.step();
        self.steps += 1;

        if engine.all_inactive() {
            self.stop(DriverState::StoppedByInactivity);
        } else if self.steps >= self.max_steps {
            self.stop(DriverState::StoppedByTimeout);
        }
        self.state
    }

    /// Run to a terminal state
    pub fn run<R: Rng>(&mut self, engine: &mut DiffusionEngine<R>) -> RunOutcome {
        self.run_with(engine, |_| {})
    }

    /// Run to a terminal state, calling `observer` after every step
    pub fn run_with<R, F>(
        &mut self,
        engine: &mut DiffusionEngine<R>,
        mut observer: F,
    ) -> RunOutcome
    where
        R: Rng,
        F: FnMut(&DiffusionEngine<R>),
    {
        while !self.state.is_terminal() {
            let before = self.steps;
            self.advance(engine);
            if self.steps > before {
                observer(engine);
            }
        }
        self.outcome()
    }

    fn stop(&mut self, state: DriverState) {
        self.state = state;
        tracing::info!(
            steps = self.steps,
            max_steps = self.max_steps,
            state = ?state,
            "Simulation stopped"
        );
    }
}

/// Run `engine` with a fresh driver capped at `max_steps`
pub fn simulate_until_stable<R: Rng>(
    engine: &mut DiffusionEngine<R>,
    max_steps: u64,
) -> RunOutcome {
    Driver::new(max_steps).run(engine)
}
