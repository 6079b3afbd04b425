use serde::Serialize;

use crate::constants::VehicleConstants;

use super::config::SimulationConfig;

/// Physical condition of the vehicle at one instant of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocketState {
    pub sim_time_s: f64,
    pub altitude_m: f64,
    pub velocity_m_s: f64,
    pub current_mass_kg: f64,
    pub fuel_remaining_kg: f64,
    pub current_thrust_n: f64,
    pub liftoff_achieved: bool,
}

/// Immutable copy of a [`RocketState`] handed to observers.
pub type Snapshot = RocketState;

impl RocketState {
    /// Vehicle sitting on the pad, fully fueled, engine at configured thrust.
    pub fn initial(config: &SimulationConfig, constants: &VehicleConstants) -> Self {
        RocketState {
            sim_time_s: 0.0,
            altitude_m: 0.0,
            velocity_m_s: 0.0,
            current_mass_kg: config.initial_total_mass_kg(constants),
            fuel_remaining_kg: constants.initial_fuel_kg,
            current_thrust_n: config.thrust_newtons(),
            liftoff_achieved: false,
        }
    }

    pub fn is_out_of_fuel(&self) -> bool {
        self.fuel_remaining_kg <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Sustained liftoff: the latch fired and the vehicle is still off the ground.
    pub fn classify(state: &RocketState) -> Self {
        if state.liftoff_achieved && state.altitude_m > 0.0 {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Lifecycle of a run. `Complete` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    Configured,
    Running,
    Complete(Outcome),
}
