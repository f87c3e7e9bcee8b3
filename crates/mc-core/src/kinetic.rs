//! Kinetic class of a molecule: which movement strategies it may use.

/// How a molecule is allowed to move through the medium.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KineticClass {
    /// Diffuses for its whole lifetime; tracks are ignored.
    #[default]
    Passive,
    /// Diffuses until it touches a microtubule, then rides it.
    Active,
}

impl KineticClass {
    /// `true` if the molecule can be captured by a track.
    #[inline]
    pub fn can_ride_tracks(self) -> bool {
        matches!(self, KineticClass::Active)
    }

    /// Label used in logs and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            KineticClass::Passive => "passive",
            KineticClass::Active  => "active",
        }
    }
}

impl std::fmt::Display for KineticClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
