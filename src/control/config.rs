use std::str::FromStr;

use crate::constants::{
    VehicleConstants, DEFAULT_ASTRONAUTS, DEFAULT_FUEL_BURN_RATE, DEFAULT_MAX_DURATION,
    DEFAULT_THRUST, DEFAULT_TIME_STEP,
};
use crate::errors::SimulationError;

/// Caller-supplied launch parameters. Only constructible through validation,
/// so every value a run sees is in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    astronaut_count: u32,
    thrust_newtons: f64,
    fuel_burn_rate_kg_s: f64,
    time_step_s: f64,
    max_duration_s: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            astronaut_count: DEFAULT_ASTRONAUTS as u32,
            thrust_newtons: DEFAULT_THRUST,
            fuel_burn_rate_kg_s: DEFAULT_FUEL_BURN_RATE,
            time_step_s: DEFAULT_TIME_STEP,
            max_duration_s: DEFAULT_MAX_DURATION,
        }
    }
}

impl SimulationConfig {
    pub fn new(
        astronaut_count: i64,
        thrust_newtons: f64,
        fuel_burn_rate_kg_s: f64,
        time_step_s: f64,
        max_duration_s: f64,
    ) -> Result<Self, SimulationError> {
        if astronaut_count < 0 {
            return Err(SimulationError::ConfigurationError(format!(
                "astronaut count cannot be negative, got {}",
                astronaut_count
            )));
        }
        let astronaut_count = u32::try_from(astronaut_count).map_err(|_| {
            SimulationError::ConfigurationError(format!(
                "astronaut count {} is too large",
                astronaut_count
            ))
        })?;

        for (name, value) in [
            ("thrust", thrust_newtons),
            ("fuel burn rate", fuel_burn_rate_kg_s),
            ("time step", time_step_s),
            ("max duration", max_duration_s),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::ConfigurationError(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        Ok(SimulationConfig {
            astronaut_count,
            thrust_newtons,
            fuel_burn_rate_kg_s,
            time_step_s,
            max_duration_s,
        })
    }

    pub fn astronaut_count(&self) -> u32 {
        self.astronaut_count
    }

    pub fn thrust_newtons(&self) -> f64 {
        self.thrust_newtons
    }

    pub fn fuel_burn_rate_kg_s(&self) -> f64 {
        self.fuel_burn_rate_kg_s
    }

    pub fn time_step_s(&self) -> f64 {
        self.time_step_s
    }

    pub fn max_duration_s(&self) -> f64 {
        self.max_duration_s
    }

    pub fn crew_mass_kg(&self, constants: &VehicleConstants) -> f64 {
        constants.crew_mass_kg(self.astronaut_count)
    }

    pub fn mass_floor_kg(&self, constants: &VehicleConstants) -> f64 {
        constants.mass_floor_kg(self.astronaut_count)
    }

    pub fn initial_total_mass_kg(&self, constants: &VehicleConstants) -> f64 {
        constants.initial_total_mass_kg(self.astronaut_count)
    }
}

/// Parses one raw input field. Blank input selects `default`.
pub fn parse_field<T: FromStr>(field: &str, raw: &str, default: T) -> Result<T, SimulationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    trimmed
        .parse::<T>()
        .map_err(|_| SimulationError::InvalidInput {
            field: field.to_string(),
            input: trimmed.to_string(),
        })
}
