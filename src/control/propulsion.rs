use crate::constants::VehicleConstants;

use super::config::SimulationConfig;
use super::rocket::RocketState;

/// Fuel, mass and thrust bookkeeping for a single burn interval.
pub struct PropulsionSystem;

impl PropulsionSystem {
    /// Burns one time step's worth of fuel from `state`.
    ///
    /// Thrust decays by `decay_factor` times the fraction of the initial load
    /// burned this step, compounding across steps. Once the tank runs dry the
    /// engine cuts off and thrust stays at zero. Returns true on the step the
    /// engine cuts off.
    pub fn burn(
        state: &mut RocketState,
        config: &SimulationConfig,
        constants: &VehicleConstants,
    ) -> bool {
        if state.is_out_of_fuel() {
            state.fuel_remaining_kg = 0.0;
            state.current_thrust_n = 0.0;
            return false;
        }

        let fuel_to_burn = config.fuel_burn_rate_kg_s() * config.time_step_s();
        if state.fuel_remaining_kg >= fuel_to_burn {
            state.current_mass_kg -= fuel_to_burn;
            state.fuel_remaining_kg -= fuel_to_burn;
            state.current_thrust_n *=
                1.0 - (fuel_to_burn / constants.initial_fuel_kg) * constants.thrust_decay_factor;
        } else {
            state.current_mass_kg -= state.fuel_remaining_kg;
            state.fuel_remaining_kg = 0.0;
        }

        // Mass is tracked separately from fuel; rounding must not take it under the floor.
        let floor = config.mass_floor_kg(constants);
        if state.current_mass_kg < floor {
            state.current_mass_kg = floor;
        }

        if state.fuel_remaining_kg <= 0.0 {
            state.fuel_remaining_kg = 0.0;
            state.current_thrust_n = 0.0;
            return true;
        }
        false
    }
}
