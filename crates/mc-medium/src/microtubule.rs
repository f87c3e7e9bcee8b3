//! A straight microtubule segment that active molecules can ride.

use mc_core::Position;

/// A transport track from `start` to `end` with a capture `radius`.
///
/// Molecules on the track always progress towards `end`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Microtubule {
    pub start:  Position,
    pub end:    Position,
    pub radius: f64,
}

impl Microtubule {
    #[inline]
    pub fn new(start: Position, end: Position, radius: f64) -> Self {
        Self { start, end, radius }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Unit vector from `start` to `end`.  Only meaningful for tracks of
    /// non-zero length, which `MediumBuilder::build` guarantees.
    #[inline]
    pub fn direction(&self) -> Position {
        (self.end - self.start) * (1.0 / self.length())
    }

    /// Shortest distance from `p` to the track's axis segment.
    pub fn distance_to(&self, p: Position) -> f64 {
        segment_distance_2(self.start, self.end, p).sqrt()
    }

    /// `true` if a sphere of radius `r` at `p` overlaps the track.
    /// Touching exactly does not count.
    #[inline]
    pub fn overlaps(&self, p: Position, r: f64) -> bool {
        self.distance_to(p) < self.radius + r
    }

    /// Move `p` up to `step` along the track direction, stopping at `end`.
    ///
    /// The lateral offset from the axis is preserved.  A point already at
    /// or past the end of the track does not move.
    pub fn advance(&self, p: Position, step: f64) -> Position {
        let dir    = self.direction();
        let along  = (p - self.start).dot(dir);
        let moved  = (self.length() - along).clamp(0.0, step);
        p + dir * moved
    }
}

/// Squared distance from `p` to the segment `a → b`.
pub(crate) fn segment_distance_2(a: Position, b: Position, p: Position) -> f64 {
    let ab = b - a;
    let len_2 = ab.dot(ab);
    let t = if len_2 > 0.0 {
        ((p - a).dot(ab) / len_2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let closest = a + ab * t;
    let d = p - closest;
    d.dot(d)
}
