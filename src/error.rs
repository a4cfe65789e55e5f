//! Error types for devctl.
//!
//! Device queries never produce these: they report absence as `None`. This
//! type covers configuration loading and CLI plumbing.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for devctl operations.
#[derive(Error, Debug)]
pub enum DevctlError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be read, parsed, or validated.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A device query produced no value.
    #[error("Probe failed: {0}")]
    ProbeError(String),
}

impl DevctlError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DevctlError::UserError(_) => exit_codes::USER_ERROR,
            DevctlError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            DevctlError::ProbeError(_) => exit_codes::PROBE_FAILURE,
        }
    }
}

/// Result type alias for devctl operations.
pub type Result<T> = std::result::Result<T, DevctlError>;
