//! Read-only movement parameters passed to every strategy call.

use mc_core::{RunConfig, StepConfig};
use mc_medium::Medium;

/// Everything a strategy may consult when computing a next position.
///
/// Built once per run by the orchestrator and shared immutably across the
/// movement phase (including across Rayon workers).
#[derive(Clone, Copy)]
pub struct MoveContext<'a> {
    /// Diffusive step magnitudes and distribution.
    pub step: StepConfig,

    /// Distance per tick along a track.
    pub active_step: f64,

    /// The tracks molecules can be captured by.
    pub medium: &'a Medium,
}

impl<'a> MoveContext<'a> {
    #[inline]
    pub fn new(step: StepConfig, active_step: f64, medium: &'a Medium) -> Self {
        Self { step, active_step, medium }
    }

    /// Pull the movement fields out of a validated [`RunConfig`].
    #[inline]
    pub fn from_config(config: &RunConfig, medium: &'a Medium) -> Self {
        Self::new(config.step, config.active_step, medium)
    }
}
