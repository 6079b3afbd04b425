use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Configuration error: invalid value {input:?} for {field}")]
    InvalidInput { field: String, input: String },

    #[error("Mass depletion anomaly: vehicle mass {mass_kg} kg is not positive")]
    MassDepletionAnomaly { mass_kg: f64 },
}

impl SimulationError {
    /// True for every error raised before a run starts.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            SimulationError::ConfigurationError(_) | SimulationError::InvalidInput { .. }
        )
    }
}
