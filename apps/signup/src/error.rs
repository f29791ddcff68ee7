//! Custom error types for the signup app

use thiserror::Error;
use trellis::TrellisError;

/// Main error type for signup startup operations
#[derive(Error, Debug)]
pub enum SignupError {
    /// Framework-level failures during bootstrap
    #[error("Framework error: {0}")]
    Framework(#[from] TrellisError),

    /// IO-related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
