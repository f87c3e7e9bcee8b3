//! `mc-movement` — how a molecule's position evolves from tick to tick.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                            |
//! |----------------|---------------------------------------------------------------------|
//! | [`context`]    | `MoveContext<'a>` — step sizes + medium, shared by every molecule   |
//! | [`strategy`]   | `MovementStrategy` — `Diffusive` / `ActiveTransport(TrackId)`       |
//! | [`collision`]  | `CollisionPolicy` — decides when a strategy is swapped              |
//! | [`kinetics`]   | `Kinetics` — strategy + policy pair owned by each molecule          |
//!
//! # Movement model
//!
//! Each tick a molecule's [`Kinetics::advance`] does exactly two things:
//!
//! 1. Ask the current [`MovementStrategy`] for the next position.  Diffusive
//!    molecules draw one delta per axis from their own RNG; molecules on a
//!    track move a fixed distance along it and never touch the RNG.
//! 2. Ask the [`CollisionPolicy`] whether that position hands the molecule
//!    to a track.  If so the strategy is replaced wholesale by
//!    `ActiveTransport(track)` and the policy by `Bound(track)`.  There is no
//!    transition back to diffusion.

pub mod collision;
pub mod context;
pub mod kinetics;
pub mod strategy;


pub use collision::CollisionPolicy;
pub use context::MoveContext;
pub use kinetics::Kinetics;
pub use strategy::MovementStrategy;
