use tracing::debug;

use crate::control::flight::FlightReport;
use crate::control::rocket::Snapshot;

/// Passive observer of a run: keeps status lines and flight extremes.
pub struct Telemetry {
    pub log: Vec<String>,
    max_velocity: f64,
    max_altitude: f64,
    min_fuel: f64,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            max_velocity: 0.0,
            max_altitude: 0.0,
            min_fuel: f64::MAX,
        }
    }

    pub fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    pub fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn status_line(snapshot: &Snapshot) -> String {
        format!(
            "T+{:.2}s | Alt: {:.2}m | Vel: {:.2} m/s | Mass: {:.2}kg | Fuel Left: {:.2}kg",
            snapshot.sim_time_s,
            snapshot.altitude_m,
            snapshot.velocity_m_s,
            snapshot.current_mass_kg,
            snapshot.fuel_remaining_kg
        )
    }

    pub fn record(&mut self, snapshot: &Snapshot) {
        if snapshot.velocity_m_s > self.max_velocity {
            self.max_velocity = snapshot.velocity_m_s;
        }
        if snapshot.altitude_m > self.max_altitude {
            self.max_altitude = snapshot.altitude_m;
        }
        if snapshot.fuel_remaining_kg < self.min_fuel {
            self.min_fuel = snapshot.fuel_remaining_kg;
        }

        let line = Self::status_line(snapshot);
        debug!("{}", line);
        self.log.push(line);
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    /// `None` until a snapshot has been recorded.
    pub fn min_fuel(&self) -> Option<f64> {
        if self.log.is_empty() {
            None
        } else {
            Some(self.min_fuel)
        }
    }

    pub fn summary_lines(&self, report: &FlightReport) -> Vec<String> {
        let state = &report.final_state;
        let mut lines = vec![
            format!("Final Time: {:.2} seconds", state.sim_time_s),
            format!("Final Altitude: {:.2} meters", state.altitude_m),
            format!("Final Velocity: {:.2} m/s", state.velocity_m_s),
            format!("Final Mass (dry mass + crew): {:.2} kg", state.current_mass_kg),
        ];
        if let Some(time) = report.liftoff_time_s() {
            lines.push(format!("Liftoff: T+{}", Self::format_time(time)));
        }
        if let Some(time) = report.engine_cutoff_time_s() {
            lines.push(format!("Engine Cutoff: T+{}", Self::format_time(time)));
        }
        if !self.log.is_empty() {
            lines.push(format!(
                "Max Altitude: {}",
                Self::format_altitude(self.max_altitude)
            ));
            lines.push(format!("Max Velocity: {:.2} m/s", self.max_velocity));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::config::SimulationConfig;
    use crate::control::flight::{FlightController, SnapshotCadence};

    #[test]
    fn test_format_time() {
        assert_eq!(Telemetry::format_time(12.5), "12.50s");
        assert_eq!(Telemetry::format_time(90.0), "1m 30.00s");
        assert_eq!(Telemetry::format_time(3_725.0), "1h 2m 5.00s");
    }

    #[test]
    fn test_format_altitude() {
        assert_eq!(Telemetry::format_altitude(999.0), "999.00 m");
        assert_eq!(Telemetry::format_altitude(12_345.0), "12.35 km");
    }

    #[test]
    fn test_records_extremes() {
        let mut controller = FlightController::new(SimulationConfig::default());
        let mut telemetry = Telemetry::new();
        for snapshot in controller.trace(SnapshotCadence::Interval(10.0)) {
            telemetry.record(&snapshot);
        }
        let report = controller.finish();

        assert_eq!(telemetry.log.len(), 4);
        assert!(telemetry.log[0].starts_with("T+10.00s | Alt: "));
        assert!(telemetry.max_altitude() > 10.0);
        assert_eq!(telemetry.min_fuel(), Some(0.0));

        let summary = telemetry.summary_lines(&report);
        assert_eq!(summary[0], "Final Time: 40.00 seconds");
        assert_eq!(summary[3], "Final Mass (dry mass + crew): 740.00 kg");
        assert!(summary.iter().any(|line| line.starts_with("Liftoff: T+")));
    }

    #[test]
    fn test_empty_telemetry() {
        let telemetry = Telemetry::new();
        assert_eq!(telemetry.min_fuel(), None);
        assert_eq!(telemetry.max_altitude(), 0.0);
    }
}
