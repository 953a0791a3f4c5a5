//! Validation, request and worker errors

use crate::float_types::Real;

/// Everything that can be wrong with the numbers handed to the tracer.
///
/// All of these are detected before the first sample is computed, so a
/// failed trace never leaves a partial boundary behind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    /// (InvalidDimension) Width or height is zero, negative, NaN or infinite
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidDimension { name: &'static str, value: Real },
    /// (InvalidExponent) An exponent is zero, negative, NaN or infinite
    #[error("Exponent {name} must be a positive finite number, got {value}")]
    InvalidExponent { name: &'static str, value: Real },
    /// (InvalidSteps) The sample count is below one, above the limit or not an integer
    #[error("Steps must be an integer between 1 and {max}, got {0}", max = crate::config::MAX_STEPS)]
    InvalidSteps(f64),
    /// (InvalidPrecision) The digit count is negative, fractional or too large
    #[error("Precision must be an integer between 0 and {max}, got {value}")]
    InvalidPrecision { value: f64, max: usize },
}

/// Failures at the message boundary.
///
/// The `Display` output of these is what ends up in the `error` field of a
/// failure response.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    /// (MissingField) A field required by the chosen request kind is absent
    #[error("{0}")]
    MissingField(String),
    /// (MissingKind) The request carries no `type` tag
    #[error("Path type required")]
    MissingKind,
    /// (UnknownKind) The `type` tag names no known generator
    #[error("Unknown path type: {0}")]
    UnknownKind(String),
    /// (Malformed) The message could not be decoded at all
    #[error("Malformed request: {0}")]
    Malformed(String),
    /// (Parameter) The request decoded but its numbers are invalid
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    /// (Internal) The tracer panicked; carries the panic message
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RequestError {
    pub(crate) fn missing(message: &str) -> Self {
        RequestError::MissingField(message.to_string())
    }
}

/// Failures of the background worker itself, as opposed to failed requests.
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    /// The worker thread could not be started
    #[error("Failed to spawn path worker: {0}")]
    Spawn(#[from] std::io::Error),
    /// The worker thread is gone, the request will never be answered
    #[error("Path worker disconnected")]
    Disconnected,
}
