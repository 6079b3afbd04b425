use crate::{constants::VehicleConstants, control::rocket::RocketState};

use super::aerodynamics::Aerodynamics;

/// Vertical force balance integrated with explicit Euler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub aerodynamics: Aerodynamics,
    pub gravity: f64,
}

/// Force breakdown of the last evaluated step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBalance {
    pub gravity: f64,
    pub drag: f64,
    pub net: f64,
    pub acceleration: f64,
}

impl Kinematics {
    pub fn new(constants: &VehicleConstants) -> Self {
        Kinematics {
            aerodynamics: Aerodynamics::new(constants.drag_coefficient),
            gravity: constants.gravity,
        }
    }

    /// Forces acting on the vehicle at its current mass, thrust and speed.
    ///
    /// `state.current_mass_kg` must be positive.
    pub fn forces(&self, state: &RocketState) -> ForceBalance {
        let gravity = state.current_mass_kg * self.gravity;
        let drag = self.aerodynamics.drag_force(state.velocity_m_s);
        let net = state.current_thrust_n - gravity - drag;
        ForceBalance {
            gravity,
            drag,
            net,
            acceleration: net / state.current_mass_kg,
        }
    }

    /// Updates velocity then altitude over `delta_time`. The vehicle cannot
    /// sink: a negative velocity is clamped to zero before altitude moves.
    pub fn advance(&self, state: &mut RocketState, delta_time: f64) -> ForceBalance {
        let balance = self.forces(state);

        state.velocity_m_s += balance.acceleration * delta_time;
        if state.velocity_m_s < 0.0 {
            state.velocity_m_s = 0.0;
        }
        state.altitude_m += state.velocity_m_s * delta_time;

        balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::config::SimulationConfig;
    use approx::assert_abs_diff_eq;

    fn pad_state(thrust: f64) -> RocketState {
        let config = SimulationConfig::new(3, thrust, 50.0, 0.5, 120.0).unwrap();
        RocketState::initial(&config, &VehicleConstants::default())
    }

    #[test]
    fn test_first_step_forces() {
        let kinematics = Kinematics::new(&VehicleConstants::default());
        let balance = kinematics.forces(&pad_state(50_000.0));

        assert_abs_diff_eq!(balance.gravity, 26_879.4, epsilon = 1e-6);
        assert_eq!(balance.drag, 0.0);
        assert_abs_diff_eq!(balance.net, 23_120.6, epsilon = 1e-6);
        assert_abs_diff_eq!(balance.acceleration, 23_120.6 / 2_740.0, epsilon = 1e-9);
    }

    #[test]
    fn test_advance_updates_velocity_before_altitude() {
        let kinematics = Kinematics::new(&VehicleConstants::default());
        let mut state = pad_state(50_000.0);
        kinematics.advance(&mut state, 0.5);

        let expected_velocity = 23_120.6 / 2_740.0 * 0.5;
        assert_abs_diff_eq!(state.velocity_m_s, expected_velocity, epsilon = 1e-9);
        assert_abs_diff_eq!(state.altitude_m, expected_velocity * 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_insufficient_thrust_clamps_velocity() {
        let kinematics = Kinematics::new(&VehicleConstants::default());
        let mut state = pad_state(4_000.0);
        let balance = kinematics.advance(&mut state, 0.5);

        assert!(balance.acceleration < 0.0);
        assert_eq!(state.velocity_m_s, 0.0);
        assert_eq!(state.altitude_m, 0.0);
    }

    #[test]
    fn test_drag_opposes_motion() {
        let kinematics = Kinematics::new(&VehicleConstants::default());
        let mut state = pad_state(50_000.0);
        state.velocity_m_s = 100.0;
        let balance = kinematics.forces(&state);
        assert_abs_diff_eq!(balance.drag, 500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            balance.net,
            50_000.0 - 26_879.4 - 500.0,
            epsilon = 1e-6
        );
    }
}
