//! Movement strategies.

use mc_core::{MoleculeRng, Position, StepDistribution, TrackId};

use crate::MoveContext;

/// The rule a molecule currently moves by.  Stored by value in the molecule
/// and replaced wholesale on a hand-off.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MovementStrategy {
    /// Random walk: independent per-axis deltas every tick.
    Diffusive,
    /// Deterministic progression along a microtubule.
    ActiveTransport(TrackId),
}

impl MovementStrategy {
    /// Next position from `current`.
    ///
    /// Never fails.  A molecule bound to a track the medium does not know
    /// stays where it is.
    pub fn next_position(
        &self,
        current: Position,
        ctx:     &MoveContext<'_>,
        rng:     &mut MoleculeRng,
    ) -> Position {
        match *self {
            MovementStrategy::Diffusive => {
                let step = &ctx.step;
                let delta = Position::new(
                    draw(step.dx, step.distribution, rng),
                    draw(step.dy, step.distribution, rng),
                    draw(step.dz, step.distribution, rng),
                );
                current + delta
            }
            MovementStrategy::ActiveTransport(track) => match ctx.medium.track(track) {
                Some(t) => t.advance(current, ctx.active_step),
                None    => current,
            },
        }
    }

    #[inline]
    pub fn is_diffusive(&self) -> bool {
        matches!(self, MovementStrategy::Diffusive)
    }
}

/// One axis of a diffusive step.
fn draw(d: f64, distribution: StepDistribution, rng: &mut MoleculeRng) -> f64 {
    match distribution {
        StepDistribution::Uniform => {
            if d == 0.0 {
                0.0
            } else {
                rng.gen_range(-d..=d)
            }
        }
        StepDistribution::Lattice => match rng.gen_range(0u8..3) {
            0 => -d,
            1 => 0.0,
            _ => d,
        },
    }
}
