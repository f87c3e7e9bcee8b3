//! `mc-sim` — tick loop orchestrator for the molcom simulator.
//!
//! # Four-phase tick loop
//!
//! ```text
//! for tick in 0..:
//!   ① Emission  — tick 0: every nanomachine start()s;
//!                 later:  every nanomachine next_step()s, in id order.
//!                 New batches are nascent.
//!   ② Movement  — every in-flight molecule advances one step
//!                 (parallel with the `parallel` feature).
//!   ③ Delivery  — in molecule creation order, each molecule overlapping a
//!                 destination hands its Signal to that machine:
//!                   Information     → Receiver role
//!                   Acknowledgement → Transmitter role
//!   ④ Cleanup   — delivered molecules are dropped; nascent ones join the
//!                 medium and first move next tick.
//! until the last message is completed or max_ticks is reached.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the movement phase on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mc_core::{KineticClass, Position, RunConfig};
//! use mc_protocol::MoleculeParams;
//! use mc_sim::{NoopObserver, RoleSpec, SimBuilder};
//!
//! let info = RoleSpec::new(Position::ORIGIN, vec![MoleculeParams::new(10, 0.5, KineticClass::Passive)]);
//! let ack  = RoleSpec::new(Position::new(20.0, 0.0, 0.0), vec![MoleculeParams::new(10, 0.5, KineticClass::Passive)]);
//!
//! let mut b = SimBuilder::new(RunConfig::default());
//! b.add_transmitter(Position::ORIGIN, 2.0, info);
//! b.add_receiver(Position::new(20.0, 0.0, 0.0), 2.0, ack);
//! let mut sim = b.build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scenario;
pub mod sim;


pub use builder::{MachineSpec, RoleSpec, SimBuilder};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use scenario::Scenario;
pub use sim::Sim;
