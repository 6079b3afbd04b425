pub mod renderer;
pub mod telemetry;
