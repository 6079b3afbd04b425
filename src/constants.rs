use crate::errors::SimulationError;

// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Vehicle Constants
pub const DRY_MASS_KG: f64 = 500.0; // structural mass
pub const INITIAL_FUEL_KG: f64 = 2_000.0;
pub const MASS_PER_ASTRONAUT_KG: f64 = 80.0; // including gear
pub const DRAG_COEFFICIENT: f64 = 0.05; // N per (m/s)²

// Flight Thresholds
pub const LIFTOFF_ALTITUDE_THRESHOLD: f64 = 10.0; // m
pub const THRUST_DECAY_FACTOR: f64 = 0.1; // per fraction of initial fuel burned

// Input Defaults
pub const DEFAULT_ASTRONAUTS: i64 = 3;
pub const DEFAULT_THRUST: f64 = 50_000.0; // N
pub const DEFAULT_FUEL_BURN_RATE: f64 = 50.0; // kg/s
pub const DEFAULT_TIME_STEP: f64 = 0.5; // s
pub const DEFAULT_MAX_DURATION: f64 = 120.0; // s

// Telemetry
pub const STATUS_INTERVAL: f64 = 10.0; // s of simulated time

/// Fixed physical description of the vehicle and its surroundings.
///
/// Passed by reference into every step so nothing in the simulation reads
/// process-wide mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleConstants {
    pub dry_mass_kg: f64,
    pub initial_fuel_kg: f64,
    pub mass_per_astronaut_kg: f64,
    pub gravity: f64,
    pub drag_coefficient: f64,
    pub liftoff_altitude_threshold_m: f64,
    pub thrust_decay_factor: f64,
}

impl Default for VehicleConstants {
    fn default() -> Self {
        VehicleConstants {
            dry_mass_kg: DRY_MASS_KG,
            initial_fuel_kg: INITIAL_FUEL_KG,
            mass_per_astronaut_kg: MASS_PER_ASTRONAUT_KG,
            gravity: GRAVITY,
            drag_coefficient: DRAG_COEFFICIENT,
            liftoff_altitude_threshold_m: LIFTOFF_ALTITUDE_THRESHOLD,
            thrust_decay_factor: THRUST_DECAY_FACTOR,
        }
    }
}

impl VehicleConstants {
    pub fn validate(&self) -> Result<(), SimulationError> {
        let strictly_positive = [
            ("dry_mass_kg", self.dry_mass_kg),
            ("initial_fuel_kg", self.initial_fuel_kg),
            ("gravity", self.gravity),
        ];
        for (name, value) in strictly_positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::ConfigurationError(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("mass_per_astronaut_kg", self.mass_per_astronaut_kg),
            ("drag_coefficient", self.drag_coefficient),
            ("liftoff_altitude_threshold_m", self.liftoff_altitude_threshold_m),
            ("thrust_decay_factor", self.thrust_decay_factor),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::ConfigurationError(format!(
                    "{} cannot be negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    pub fn crew_mass_kg(&self, astronaut_count: u32) -> f64 {
        f64::from(astronaut_count) * self.mass_per_astronaut_kg
    }

    /// Structural + crew mass: what is left once every kilogram of fuel is gone.
    pub fn mass_floor_kg(&self, astronaut_count: u32) -> f64 {
        self.dry_mass_kg + self.crew_mass_kg(astronaut_count)
    }

    pub fn initial_total_mass_kg(&self, astronaut_count: u32) -> f64 {
        self.dry_mass_kg + self.initial_fuel_kg + self.crew_mass_kg(astronaut_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_masses() {
        let constants = VehicleConstants::default();
        assert_abs_diff_eq!(constants.crew_mass_kg(3), 240.0, epsilon = 1e-9);
        assert_abs_diff_eq!(constants.mass_floor_kg(3), 740.0, epsilon = 1e-9);
        assert_abs_diff_eq!(constants.initial_total_mass_kg(3), 2_740.0, epsilon = 1e-9);
        assert_abs_diff_eq!(constants.initial_total_mass_kg(0), 2_500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_default_constants_are_valid() {
        assert!(VehicleConstants::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_dry_mass() {
        let constants = VehicleConstants {
            dry_mass_kg: 0.0,
            ..VehicleConstants::default()
        };
        assert!(matches!(
            constants.validate(),
            Err(SimulationError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_rejects_negative_drag() {
        let constants = VehicleConstants {
            drag_coefficient: -0.01,
            ..VehicleConstants::default()
        };
        assert!(constants.validate().is_err());
    }
}
