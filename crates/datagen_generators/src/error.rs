//! Error types for generator configuration.

use thiserror::Error;

/// Generator configuration error.
///
/// Generators themselves never fail once built; these errors come from
/// parsing the options that select how they run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// Output encoding name not recognised.
    #[error("Unknown encoding: {0}. Must be one of: binary, text")]
    UnknownEncoding(String),

    /// Coordinate pair that is not two comma-separated numbers.
    #[error("Invalid coordinate pair '{0}': expected <longitude>,<latitude>")]
    InvalidCoordinatePair(String),
}
