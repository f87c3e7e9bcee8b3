//! Run configuration consumed by the protocol and movement layers.
//!
//! Typically deserialised from a scenario file by `mc-sim` and validated
//! once, before any nanomachine is built.

use crate::{McError, McResult, Tick};

/// How each axis of a diffusive step is drawn.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StepDistribution {
    /// Continuous uniform draw in `[-d, d]`.
    #[default]
    Uniform,
    /// One of `{-d, 0, +d}`, each with probability 1/3.
    Lattice,
}

/// Per-axis diffusive step magnitudes.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepConfig {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub distribution: StepDistribution,
}

impl StepConfig {
    /// Equal step size on every axis.
    pub fn isotropic(d: f64, distribution: StepDistribution) -> Self {
        Self { dx: d, dy: d, dz: d, distribution }
    }

    /// A step that never moves, for protocol-only scenarios.
    pub fn still() -> Self {
        Self::isotropic(0.0, StepDistribution::Uniform)
    }
}

impl Default for StepConfig {
    fn default() -> Self {
        Self::isotropic(1.0, StepDistribution::Uniform)
    }
}

/// Top-level run configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Number of messages the transmitter must get across.
    pub num_messages: u32,

    /// Retransmission credits granted each time a message is (re)started.
    pub num_retransmissions: u32,

    /// Ticks to wait after an emission before a timeout fires.
    pub retransmit_wait: u32,

    /// Acknowledged (ARQ) mode.  When `false` the transmitter treats an
    /// elapsed wait as implicit delivery and receivers never answer.
    pub use_acknowledgements: bool,

    /// Hard ceiling on run length; the run stops here even if the last
    /// message was never completed.
    pub max_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Diffusive random-walk step.
    pub step: StepConfig,

    /// Distance travelled per tick by a molecule riding a microtubule.
    pub active_step: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_messages:         1,
            num_retransmissions:  3,
            retransmit_wait:      100,
            use_acknowledgements: true,
            max_ticks:            100_000,
            seed:                 0,
            step:                 StepConfig::default(),
            active_step:          1.0,
        }
    }
}

impl RunConfig {
    /// The tick at which the run stops regardless of progress (exclusive).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }

    /// Reject non-physical values.
    pub fn validate(&self) -> McResult<()> {
        if self.num_messages == 0 {
            return Err(McError::Config("num_messages must be >= 1".into()));
        }
        if self.num_retransmissions == 0 {
            return Err(McError::Config("num_retransmissions must be >= 1".into()));
        }
        if self.retransmit_wait == 0 {
            return Err(McError::Config("retransmit_wait must be >= 1 tick".into()));
        }
        if self.max_ticks == 0 {
            return Err(McError::Config("max_ticks must be >= 1".into()));
        }
        for (axis, d) in [("dx", self.step.dx), ("dy", self.step.dy), ("dz", self.step.dz)] {
            if !d.is_finite() || d < 0.0 {
                return Err(McError::Config(format!("step {axis} must be finite and >= 0, got {d}")));
            }
        }
        if !self.active_step.is_finite() || self.active_step < 0.0 {
            return Err(McError::Config(format!(
                "active_step must be finite and >= 0, got {}",
                self.active_step
            )));
        }
        Ok(())
    }
}
