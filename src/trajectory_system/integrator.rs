use serde::Serialize;

use crate::{
    constants::VehicleConstants,
    control::{config::SimulationConfig, propulsion::PropulsionSystem, rocket::RocketState},
};

use super::kinematics::Kinematics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlightEventKind {
    Liftoff,
    EngineCutoff,
}

/// A discrete transition observed while stepping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightEvent {
    pub time_s: f64,
    pub kind: FlightEventKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepOutput {
    pub state: RocketState,
    pub events: Vec<FlightEvent>,
}

/// Advances `state` by one time step.
///
/// Pure: the same inputs always produce the same output. The caller must
/// guarantee `state.current_mass_kg > 0`.
pub fn integrate_step(
    state: &RocketState,
    config: &SimulationConfig,
    constants: &VehicleConstants,
) -> StepOutput {
    let mut next = *state;
    let mut events = Vec::new();

    Kinematics::new(constants).advance(&mut next, config.time_step_s());

    if PropulsionSystem::burn(&mut next, config, constants) {
        events.push(FlightEvent {
            time_s: next.sim_time_s,
            kind: FlightEventKind::EngineCutoff,
        });
    }

    // One-way latch; stamped before the clock advances.
    if next.altitude_m >= constants.liftoff_altitude_threshold_m && !next.liftoff_achieved {
        next.liftoff_achieved = true;
        events.push(FlightEvent {
            time_s: next.sim_time_s,
            kind: FlightEventKind::Liftoff,
        });
    }

    next.sim_time_s += config.time_step_s();

    StepOutput {
        state: next,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn defaults() -> (SimulationConfig, VehicleConstants) {
        (SimulationConfig::default(), VehicleConstants::default())
    }

    #[test]
    fn test_first_step_from_pad() {
        let (config, constants) = defaults();
        let initial = RocketState::initial(&config, &constants);
        let out = integrate_step(&initial, &config, &constants);

        let acceleration = (50_000.0 - 2_740.0 * 9.81) / 2_740.0;
        assert_abs_diff_eq!(out.state.velocity_m_s, acceleration * 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(out.state.altitude_m, acceleration * 0.25, epsilon = 1e-9);
        assert_abs_diff_eq!(out.state.sim_time_s, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(out.state.current_mass_kg, 2_715.0, epsilon = 1e-9);
        assert_abs_diff_eq!(out.state.fuel_remaining_kg, 1_975.0, epsilon = 1e-9);
        assert!(!out.state.liftoff_achieved);
        assert!(out.events.is_empty());
    }

    #[test]
    fn test_step_is_deterministic() {
        let (config, constants) = defaults();
        let initial = RocketState::initial(&config, &constants);
        let a = integrate_step(&initial, &config, &constants);
        let b = integrate_step(&initial, &config, &constants);
        assert_eq!(a, b);
    }

    #[test]
    fn test_liftoff_latches_with_pre_step_time() {
        let (config, constants) = defaults();
        let mut state = RocketState::initial(&config, &constants);
        state.sim_time_s = 3.0;
        state.altitude_m = 9.9;
        state.velocity_m_s = 5.0;

        let out = integrate_step(&state, &config, &constants);

        assert!(out.state.liftoff_achieved);
        assert_eq!(
            out.events,
            vec![FlightEvent {
                time_s: 3.0,
                kind: FlightEventKind::Liftoff
            }]
        );
        assert_abs_diff_eq!(out.state.sim_time_s, 3.5, epsilon = 1e-12);
    }

    #[test]
    fn test_liftoff_fires_once() {
        let (config, constants) = defaults();
        let mut state = RocketState::initial(&config, &constants);
        state.altitude_m = 50.0;
        state.velocity_m_s = 20.0;
        state.liftoff_achieved = true;

        let out = integrate_step(&state, &config, &constants);
        assert!(out.state.liftoff_achieved);
        assert!(out.events.is_empty());
    }

    #[test]
    fn test_engine_cutoff_event() {
        let (config, constants) = defaults();
        let mut state = RocketState::initial(&config, &constants);
        state.sim_time_s = 39.5;
        state.fuel_remaining_kg = 25.0;
        state.current_mass_kg = 765.0;
        state.altitude_m = 500.0;
        state.velocity_m_s = 30.0;
        state.liftoff_achieved = true;

        let out = integrate_step(&state, &config, &constants);
        assert_eq!(out.state.current_thrust_n, 0.0);
        assert_eq!(out.state.fuel_remaining_kg, 0.0);
        assert_eq!(
            out.events,
            vec![FlightEvent {
                time_s: 39.5,
                kind: FlightEventKind::EngineCutoff
            }]
        );
    }

    #[test]
    fn test_coasting_after_cutoff() {
        let (config, constants) = defaults();
        let mut state = RocketState::initial(&config, &constants);
        state.fuel_remaining_kg = 0.0;
        state.current_thrust_n = 0.0;
        state.current_mass_kg = 740.0;
        state.altitude_m = 1_000.0;
        state.velocity_m_s = 40.0;
        state.liftoff_achieved = true;

        let out = integrate_step(&state, &config, &constants);

        let expected_accel = (-(740.0 * 9.81) - 0.05 * 1_600.0) / 740.0;
        assert_abs_diff_eq!(
            out.state.velocity_m_s,
            40.0 + expected_accel * 0.5,
            epsilon = 1e-9
        );
        assert_eq!(out.state.current_thrust_n, 0.0);
        assert!(out.events.is_empty());
    }
}
