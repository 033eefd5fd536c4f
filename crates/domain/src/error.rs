//! Domain error types.

use thiserror::Error;

/// Errors that can occur while building order views.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The state code is not one the platform defines.
    #[error("Unknown order state: {0}")]
    UnknownState(String),
}
