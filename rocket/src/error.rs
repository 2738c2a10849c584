//! Errors surfaced by the driver. Any of these ends the run.
use std::path::PathBuf;

use rsim_physics::ConfigurationError;
use thiserror::Error;

/// Anything that stops a run before it finishes.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The core refused the parameters; the rocket never launched or stopped mid-flight.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The config file could not be opened or read.
    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        /// File that was asked for.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// The config file is not a valid launch config.
    #[error("failed to parse config {}: {source}", path.display())]
    ParseConfig {
        /// File that was read.
        path: PathBuf,
        /// YAML error, with its location in the file.
        source: serde_yaml::Error,
    },

    /// The report could not be created or fully written.
    #[error("failed to write report {}: {source}", path.display())]
    WriteReport {
        /// Destination of the report.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// The report could not be turned into JSON.
    #[error("failed to encode report: {0}")]
    EncodeReport(#[from] serde_json::Error),
}
