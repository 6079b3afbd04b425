pub mod constants;
pub mod control;
pub mod errors;
pub mod io;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::config::{parse_field, SimulationConfig};
pub use control::flight::{
    run, FlightController, FlightReport, SnapshotCadence, TerminationReason, Trace,
};
pub use control::propulsion::PropulsionSystem;
pub use control::rocket::{FlightPhase, Outcome, RocketState, Snapshot};
pub use errors::SimulationError;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::integrator::{integrate_step, FlightEvent, FlightEventKind, StepOutput};
pub use trajectory_system::kinematics::Kinematics;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::renderer::{renderer_for, OutcomeRenderer};
pub use telemetry_system::telemetry::Telemetry;
