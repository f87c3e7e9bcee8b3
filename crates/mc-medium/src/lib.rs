//! `mc-medium` — the fixed structures molecules move through.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`microtubule`]  | `Microtubule` — a straight transport track with a radius   |
//! | [`medium`]       | `Medium` (tracks + R-tree), `MediumBuilder`                |
//! | [`error`]        | `MediumError`, `MediumResult<T>`                           |
//!
//! Tracks are owned by the `Medium` and referenced everywhere else by
//! [`TrackId`][mc_core::TrackId].  The medium never changes once built.

pub mod error;
pub mod medium;
pub mod microtubule;


pub use error::{MediumError, MediumResult};
pub use medium::{Medium, MediumBuilder};
pub use microtubule::Microtubule;
