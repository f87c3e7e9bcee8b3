//! Collision policy: whether reaching a position switches the strategy.

use mc_core::{KineticClass, Position, TrackId};
use mc_medium::Medium;

/// Attached to every molecule alongside its [`MovementStrategy`][crate::MovementStrategy].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Tracks are ignored.
    Free,
    /// The first track overlapping the molecule captures it.
    TrackCapture,
    /// Already riding `TrackId`; never switches again.
    Bound(TrackId),
}

impl CollisionPolicy {
    /// Initial policy for a freshly created molecule.
    pub fn for_class(class: KineticClass) -> Self {
        if class.can_ride_tracks() {
            CollisionPolicy::TrackCapture
        } else {
            CollisionPolicy::Free
        }
    }

    /// The track that captures a molecule of radius `radius` at `candidate`,
    /// if this policy allows a capture at all.
    pub fn resolve(&self, candidate: Position, radius: f64, medium: &Medium) -> Option<TrackId> {
        match self {
            CollisionPolicy::TrackCapture => medium.capture(candidate, radius),
            CollisionPolicy::Free | CollisionPolicy::Bound(_) => None,
        }
    }
}
