//! The medium: every microtubule in the scenario plus an R-tree over them.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) holds one entry per track, keyed by the track's
//! axis segment.  Capture queries walk the tree in order of increasing axis
//! distance and stop once no remaining track can be within reach, so the
//! per-molecule cost stays flat as the number of tracks grows.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use mc_core::{Position, TrackId};

use crate::microtubule::segment_distance_2;
use crate::{MediumError, MediumResult, Microtubule};

// ── R-tree track entry ────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a track's axis segment and its `TrackId`.
#[derive(Clone)]
struct TrackEntry {
    start: Position,
    end:   Position,
    id:    TrackId,
}

impl RTreeObject for TrackEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            self.start.min(self.end).to_array(),
            self.start.max(self.end).to_array(),
        )
    }
}

impl PointDistance for TrackEntry {
    /// Squared distance from the query point to the track's axis segment.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        segment_distance_2(self.start, self.end, Position::from(*point))
    }
}

// ── Medium ────────────────────────────────────────────────────────────────────

/// Immutable collection of transport tracks.  Build with [`MediumBuilder`].
pub struct Medium {
    /// Tracks indexed by `TrackId`.
    pub tracks: Vec<Microtubule>,

    /// Largest track radius; bounds how far the R-tree walk must go.
    max_radius: f64,

    spatial_idx: RTree<TrackEntry>,
}

impl Medium {
    /// A medium with no tracks.  Active molecules simply keep diffusing.
    pub fn empty() -> Self {
        Self {
            tracks:      Vec::new(),
            max_radius:  0.0,
            spatial_idx: RTree::new(),
        }
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    #[inline]
    pub fn track(&self, id: TrackId) -> Option<&Microtubule> {
        self.tracks.get(id.index())
    }

    /// The track a sphere of radius `r` at `p` overlaps, if any.
    ///
    /// When several tracks overlap the lowest `TrackId` wins, so the answer
    /// depends only on the scenario's track order.
    pub fn capture(&self, p: Position, r: f64) -> Option<TrackId> {
        if self.tracks.is_empty() {
            return None;
        }
        let point = p.to_array();
        let reach = self.max_radius + r;
        self.spatial_idx
            .nearest_neighbor_iter(&point)
            .take_while(|e| e.distance_2(&point) < reach * reach)
            .filter(|e| self.tracks[e.id.index()].overlaps(p, r))
            .map(|e| e.id)
            .min()
    }
}

// ── MediumBuilder ─────────────────────────────────────────────────────────────

/// Collect tracks, then call [`build`](Self::build) to validate them and
/// bulk-load the spatial index.
///
/// # Example
///
/// ```
/// use mc_core::Position;
/// use mc_medium::MediumBuilder;
///
/// let mut b = MediumBuilder::new();
/// let t = b.add_microtubule(Position::new(0.0, 0.0, 0.0), Position::new(10.0, 0.0, 0.0), 0.5);
/// let medium = b.build().unwrap();
/// assert_eq!(medium.capture(Position::new(4.0, 0.2, 0.0), 0.1), Some(t));
/// ```
#[derive(Default)]
pub struct MediumBuilder {
    tracks: Vec<Microtubule>,
}

impl MediumBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track and return its `TrackId` (sequential from 0).
    pub fn add_microtubule(&mut self, start: Position, end: Position, radius: f64) -> TrackId {
        self.add(Microtubule::new(start, end, radius))
    }

    pub fn add(&mut self, track: Microtubule) -> TrackId {
        let id = TrackId(self.tracks.len() as u32);
        self.tracks.push(track);
        id
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Validate every track and produce the [`Medium`].
    pub fn build(self) -> MediumResult<Medium> {
        for (i, t) in self.tracks.iter().enumerate() {
            let id = TrackId(i as u32);
            if !t.start.is_finite() || !t.end.is_finite() {
                return Err(MediumError::NonFiniteTrack(id));
            }
            mc_core::error::check_radius("microtubule", t.radius)?;
            if t.length() == 0.0 {
                return Err(MediumError::DegenerateTrack(id));
            }
        }

        let entries: Vec<TrackEntry> = self
            .tracks
            .iter()
            .enumerate()
            .map(|(i, t)| TrackEntry { start: t.start, end: t.end, id: TrackId(i as u32) })
            .collect();
        let max_radius = self.tracks.iter().map(|t| t.radius).fold(0.0, f64::max);

        Ok(Medium {
            tracks: self.tracks,
            max_radius,
            spatial_idx: RTree::bulk_load(entries),
        })
    }
}
