use serde::Serialize;
use tracing::{info, trace, warn};

use crate::{
    constants::VehicleConstants,
    errors::SimulationError,
    trajectory_system::integrator::{integrate_step, FlightEvent, FlightEventKind},
};

use super::{
    config::SimulationConfig,
    rocket::{FlightPhase, Outcome, RocketState, Snapshot},
};

/// Slack for accumulated floating-point error in the trace interval test.
const CADENCE_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TerminationReason {
    /// `sim_time_s` reached `max_duration_s`.
    TimeLimit,
    /// Mass fell to the structural+crew floor.
    MassFloor,
    /// Mass was not positive before a step; the run halted without stepping.
    MassDepletionAnomaly,
}

/// How often [`Trace`] yields a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapshotCadence {
    EveryStep,
    /// Whenever at least this many simulated seconds passed since the last
    /// emitted snapshot.
    Interval(f64),
}

/// Everything a caller learns from a completed run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightReport {
    pub outcome: Outcome,
    pub termination: TerminationReason,
    pub final_state: RocketState,
    pub events: Vec<FlightEvent>,
    pub steps: usize,
}

impl FlightReport {
    pub fn liftoff_time_s(&self) -> Option<f64> {
        self.event_time(FlightEventKind::Liftoff)
    }

    pub fn engine_cutoff_time_s(&self) -> Option<f64> {
        self.event_time(FlightEventKind::EngineCutoff)
    }

    fn event_time(&self, kind: FlightEventKind) -> Option<f64> {
        self.events
            .iter()
            .find(|event| event.kind == kind)
            .map(|event| event.time_s)
    }
}

/// Owns a run from launch configuration to classified outcome.
pub struct FlightController {
    config: SimulationConfig,
    constants: VehicleConstants,
    state: RocketState,
    events: Vec<FlightEvent>,
    steps: usize,
    phase: FlightPhase,
    stopped: Option<(TerminationReason, Outcome)>,
}

impl FlightController {
    pub fn new(config: SimulationConfig) -> Self {
        let constants = VehicleConstants::default();
        Self::from_state(config, constants, RocketState::initial(&config, &constants))
    }

    pub fn with_constants(
        config: SimulationConfig,
        constants: VehicleConstants,
    ) -> Result<Self, SimulationError> {
        constants.validate()?;
        Ok(Self::from_state(
            config,
            constants,
            RocketState::initial(&config, &constants),
        ))
    }

    fn from_state(
        config: SimulationConfig,
        constants: VehicleConstants,
        state: RocketState,
    ) -> Self {
        FlightController {
            config,
            constants,
            state,
            events: Vec::new(),
            steps: 0,
            phase: FlightPhase::Configured,
            stopped: None,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn constants(&self) -> &VehicleConstants {
        &self.constants
    }

    pub fn state(&self) -> &RocketState {
        &self.state
    }

    pub fn events(&self) -> &[FlightEvent] {
        &self.events
    }

    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    /// Why the run must stop now, or `None` if another step is allowed.
    pub fn termination(&self) -> Option<TerminationReason> {
        let mass = self.state.current_mass_kg;
        if mass.is_nan() || mass <= 0.0 {
            return Some(TerminationReason::MassDepletionAnomaly);
        }
        if self.state.sim_time_s >= self.config.max_duration_s() {
            return Some(TerminationReason::TimeLimit);
        }
        if mass <= self.config.mass_floor_kg(&self.constants) {
            return Some(TerminationReason::MassFloor);
        }
        None
    }

    /// Advances one step and returns the committed state, or `None` once the
    /// run has terminated.
    pub fn step(&mut self) -> Option<RocketState> {
        self.advance().ok()
    }

    fn advance(&mut self) -> Result<RocketState, (TerminationReason, Outcome)> {
        if let Some(stopped) = self.stopped {
            return Err(stopped);
        }
        if let Some(reason) = self.termination() {
            return Err(self.complete(reason));
        }
        self.phase = FlightPhase::Running;

        let output = integrate_step(&self.state, &self.config, &self.constants);
        for event in &output.events {
            match event.kind {
                FlightEventKind::Liftoff => {
                    info!(time_s = event.time_s, "liftoff achieved at T+{:.2}s", event.time_s);
                }
                FlightEventKind::EngineCutoff => {
                    info!(time_s = event.time_s, "engine cutoff at T+{:.2}s", event.time_s);
                }
            }
        }
        self.events.extend(output.events);
        self.state = output.state;
        self.steps += 1;

        trace!(
            step = self.steps,
            time_s = self.state.sim_time_s,
            altitude_m = self.state.altitude_m,
            velocity_m_s = self.state.velocity_m_s,
            mass_kg = self.state.current_mass_kg,
            "step committed"
        );
        Ok(self.state)
    }

    /// Lazily yields snapshots while driving the run forward. Dropping the
    /// iterator early leaves the run paused; [`FlightController::finish`]
    /// completes it.
    pub fn trace(&mut self, cadence: SnapshotCadence) -> Trace<'_> {
        let last_emitted_s = self.state.sim_time_s;
        Trace {
            controller: self,
            cadence,
            last_emitted_s,
        }
    }

    /// Runs the remaining steps and classifies the final state.
    pub fn finish(mut self) -> FlightReport {
        let (termination, outcome) = loop {
            if let Err(stopped) = self.advance() {
                break stopped;
            }
        };

        FlightReport {
            outcome,
            termination,
            final_state: self.state,
            events: self.events,
            steps: self.steps,
        }
    }

    fn complete(&mut self, reason: TerminationReason) -> (TerminationReason, Outcome) {
        let outcome = match reason {
            TerminationReason::MassDepletionAnomaly => {
                let anomaly = SimulationError::MassDepletionAnomaly {
                    mass_kg: self.state.current_mass_kg,
                };
                warn!(%anomaly, "halting run without stepping");
                Outcome::Failure
            }
            TerminationReason::TimeLimit | TerminationReason::MassFloor => {
                Outcome::classify(&self.state)
            }
        };
        self.phase = FlightPhase::Complete(outcome);
        self.stopped = Some((reason, outcome));

        info!(
            ?reason,
            ?outcome,
            time_s = self.state.sim_time_s,
            altitude_m = self.state.altitude_m,
            "run complete"
        );
        (reason, outcome)
    }
}

/// Runs `config` with the default vehicle to completion.
pub fn run(config: SimulationConfig) -> FlightReport {
    FlightController::new(config).finish()
}

/// Finite, non-restartable stream of snapshots from a [`FlightController`].
pub struct Trace<'a> {
    controller: &'a mut FlightController,
    cadence: SnapshotCadence,
    last_emitted_s: f64,
}

impl Iterator for Trace<'_> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        loop {
            let state = self.controller.step()?;
            match self.cadence {
                SnapshotCadence::EveryStep => return Some(state),
                SnapshotCadence::Interval(interval) => {
                    if state.sim_time_s - self.last_emitted_s + CADENCE_TOLERANCE >= interval {
                        self.last_emitted_s = state.sim_time_s;
                        return Some(state);
                    }
                }
            }
        }
    }
}
