//! `mc-core` — foundational types for the `molcom` simulator.
//!
//! This crate is a dependency of every other `mc-*` crate.  It has no `mc-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`ids`]         | `NanoMachineId`, `MoleculeId`, `TrackId`, `MsgId`       |
//! | [`geo`]         | `Position`, Euclidean distance, vector helpers          |
//! | [`time`]        | `Tick`                                                  |
//! | [`config`]      | `RunConfig`, `StepConfig`, `StepDistribution`           |
//! | [`rng`]         | `MoleculeRng` (per-molecule deterministic RNG)          |
//! | [`kinetic`]     | `KineticClass` enum                                     |
//! | [`error`]       | `McError`, `McResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `mc-sim` scenario loading.                     |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod kinetic;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{RunConfig, StepConfig, StepDistribution};
pub use error::{McError, McResult};
pub use geo::Position;
pub use ids::{MoleculeId, MsgId, NanoMachineId, TrackId};
pub use kinetic::KineticClass;
pub use rng::MoleculeRng;
pub use time::Tick;
