//! `mc-protocol` — the reliability protocol spoken by nanomachines.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                         |
//! |-----------------|------------------------------------------------------------------|
//! | [`status`]      | `CommStatus` — outcome of the last exchange                      |
//! | [`params`]      | `MoleculeParams`, `Adaptation` — what a batch is made of         |
//! | [`creator`]     | `MoleculeCreator` — the batch factory owned by each role         |
//! | [`context`]     | `RoleContext<'a>`, `CompletionLog`, `Completion`                 |
//! | [`transmitter`] | `Transmitter` — sends information, waits for acknowledgements    |
//! | [`receiver`]    | `Receiver` — accepts information in order, acknowledges it       |
//! | [`nanomachine`] | `NanoMachine`, `Capability` — owns one or two roles              |
//!
//! # Design notes
//!
//! Roles never hold a reference to the simulation.  Every call that needs
//! run state receives a [`RoleContext`] built by the orchestrator for the
//! current tick: the run configuration, the molecule store new batches are
//! registered in, and the completion log.
//!
//! Roles never emit molecules from inside `receive`.  A delivery that calls
//! for a reply sets the role's *deferred* flag and the batch goes out during
//! the next emission phase.

pub mod context;
pub mod creator;
pub mod nanomachine;
pub mod params;
pub mod receiver;
pub mod status;
pub mod transmitter;

#[cfg(test)]
mod tests;

pub use context::{Completion, CompletionLog, RoleContext};
pub use creator::MoleculeCreator;
pub use nanomachine::{Capability, NanoMachine};
pub use params::{Adaptation, MoleculeParams};
pub use receiver::Receiver;
pub use status::CommStatus;
pub use transmitter::Transmitter;
