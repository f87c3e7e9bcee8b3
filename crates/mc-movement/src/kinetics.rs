//! `Kinetics` — the strategy/policy pair owned by each molecule.

use mc_core::{KineticClass, MoleculeRng, Position, TrackId};

use crate::{CollisionPolicy, MoveContext, MovementStrategy};

/// A molecule's movement state.  Always holds exactly one strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Kinetics {
    strategy:  MovementStrategy,
    collision: CollisionPolicy,
}

impl Kinetics {
    /// Every molecule starts out diffusing; its class decides whether it can
    /// later be captured by a track.
    pub fn new(class: KineticClass) -> Self {
        Self {
            strategy:  MovementStrategy::Diffusive,
            collision: CollisionPolicy::for_class(class),
        }
    }

    /// Start directly on `track`, bypassing capture.
    pub fn on_track(track: TrackId) -> Self {
        Self {
            strategy:  MovementStrategy::ActiveTransport(track),
            collision: CollisionPolicy::Bound(track),
        }
    }

    #[inline]
    pub fn strategy(&self) -> MovementStrategy {
        self.strategy
    }

    #[inline]
    pub fn collision(&self) -> CollisionPolicy {
        self.collision
    }

    /// The track being ridden, if any.
    pub fn track(&self) -> Option<TrackId> {
        match self.strategy {
            MovementStrategy::ActiveTransport(t) => Some(t),
            MovementStrategy::Diffusive => None,
        }
    }

    /// Apply the current strategy once and resolve any hand-off at the
    /// resulting position.  Returns the new position.
    pub fn advance(
        &mut self,
        current: Position,
        radius:  f64,
        ctx:     &MoveContext<'_>,
        rng:     &mut MoleculeRng,
    ) -> Position {
        let next = self.strategy.next_position(current, ctx, rng);
        if let Some(track) = self.collision.resolve(next, radius, ctx.medium) {
            *self = Kinetics::on_track(track);
        }
        next
    }
}
