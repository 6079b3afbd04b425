use std::io::{self, Write};

use crate::control::rocket::Snapshot;

/// Write a snapshot trace in CSV format.
///
/// Columns: time_s, altitude_m, velocity_m_s, mass_kg, fuel_kg, thrust_n, liftoff
pub fn write_trace<W: Write>(writer: &mut W, trace: &[Snapshot]) -> io::Result<()> {
    writeln!(
        writer,
        "time_s,altitude_m,velocity_m_s,mass_kg,fuel_kg,thrust_n,liftoff"
    )?;

    for s in trace {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{}",
            s.sim_time_s,
            s.altitude_m,
            s.velocity_m_s,
            s.current_mass_kg,
            s.fuel_remaining_kg,
            s.current_thrust_n,
            s.liftoff_achieved,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::VehicleConstants;
    use crate::control::config::SimulationConfig;
    use crate::control::rocket::RocketState;

    #[test]
    fn csv_output_has_header_and_rows() {
        let config = SimulationConfig::default();
        let first = RocketState::initial(&config, &VehicleConstants::default());
        let second = RocketState {
            sim_time_s: 0.5,
            altitude_m: 2.1,
            liftoff_achieved: false,
            ..first
        };

        let mut buf = Vec::new();
        write_trace(&mut buf, &[first, second]).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time_s,"));
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "0.0000,0.0000,0.0000,2740.0000,2000.0000,50000.0000,false"
        );
        assert!(lines[2].starts_with("0.5000,2.1000,"));
    }
}
