//! Medium error type.

use thiserror::Error;

use mc_core::{McError, TrackId};

/// Errors produced while building a [`Medium`][crate::Medium].
#[derive(Debug, Error)]
pub enum MediumError {
    #[error("track {0} has zero length")]
    DegenerateTrack(TrackId),

    #[error("track {0} has a non-finite endpoint")]
    NonFiniteTrack(TrackId),

    #[error(transparent)]
    Core(#[from] McError),
}

pub type MediumResult<T> = Result<T, MediumError>;
