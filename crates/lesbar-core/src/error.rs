//! Error types for lesbar-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration, including the
/// count-definition schema.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// The count-definition source could not be read.
    ///
    /// This is fatal: without a validated name set the accumulator cannot
    /// produce a counts map.
    #[error("failed to read count definitions from {path}")]
    CountDefinitions {
        /// Path to the count-definition file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The count-definition source names a counter this pipeline does not
    /// compute.
    #[error("unknown counter name in count definitions: {name}")]
    UnknownCounter {
        /// The unrecognized counter name.
        name: String,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while writing diagnostic dump files.
#[derive(Error, Debug)]
pub enum DumpError {
    /// A trace file or its directory could not be written.
    #[error("failed to write diagnostic file {path}")]
    Write {
        /// Path of the file that failed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`DumpError`].
pub type DumpResult<T> = Result<T, DumpError>;
