//! Framework error type.
//!
//! Sub-crates define their own error enums and convert `McError` into them
//! via `From` impls.

use thiserror::Error;

use crate::{NanoMachineId, TrackId};

/// The top-level error type for `mc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum McError {
    #[error("nanomachine {0} not found")]
    NanoMachineNotFound(NanoMachineId),

    #[error("track {0} not found")]
    TrackNotFound(TrackId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `mc-*` crates.
pub type McResult<T> = Result<T, McError>;

/// Reject anything that is not a finite, strictly positive radius.
pub fn check_radius(what: &str, radius: f64) -> McResult<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(McError::Config(format!("{what} radius must be finite and > 0, got {radius}")))
    }
}
