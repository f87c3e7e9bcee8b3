//! Molecule batch parameters.

use mc_core::{KineticClass, McError, McResult};

/// How a batch entry's size reacts to feedback.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Adaptation {
    /// Always `count` molecules.
    #[default]
    Fixed,
    /// `step` more molecules after every failure, capped at `max`; back to
    /// `count` after a success.
    Additive { step: u32, max: u32 },
}

/// One kind of molecule released in every batch.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoleculeParams {
    /// Molecules of this kind per batch (before adaptation).
    pub count: u32,

    pub radius: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub class: KineticClass,

    #[cfg_attr(feature = "serde", serde(default))]
    pub adaptation: Adaptation,
}

impl MoleculeParams {
    pub fn new(count: u32, radius: f64, class: KineticClass) -> Self {
        Self { count, radius, class, adaptation: Adaptation::Fixed }
    }

    pub fn with_adaptation(mut self, adaptation: Adaptation) -> Self {
        self.adaptation = adaptation;
        self
    }

    pub fn validate(&self) -> McResult<()> {
        if self.count == 0 {
            return Err(McError::Config("molecule count must be >= 1".into()));
        }
        mc_core::error::check_radius("molecule", self.radius)?;
        if let Adaptation::Additive { max, .. } = self.adaptation {
            if max < self.count {
                return Err(McError::Config(format!(
                    "adaptive max {max} is below the base count {}",
                    self.count
                )));
            }
        }
        Ok(())
    }
}
