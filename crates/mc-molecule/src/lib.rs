//! `mc-molecule` — the mobile carriers of the simulation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`signal`]     | `Signal` — `Information(MsgId)` / `Acknowledgement(MsgId)`      |
//! | [`molecule`]   | `Molecule`, `Target`, the overlap-based delivery test           |
//! | [`store`]      | `MoleculeStore` — live set in creation order, `Delivery`        |
//!
//! # Lifecycle
//!
//! 1. A batch factory calls [`MoleculeStore::spawn`] during the emission
//!    phase.  The molecule is *nascent*: it neither moves nor can be
//!    delivered during the tick it was created in.
//! 2. At the end of that tick [`MoleculeStore::admit_nascent`] puts it in
//!    flight.
//! 3. Every later tick it is moved ([`MoleculeStore::advance_all`]) and
//!    tested against its destination list ([`MoleculeStore::deliveries`]).
//! 4. Once delivered it is dropped ([`MoleculeStore::remove`]).
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs `advance_all` on Rayon's thread pool.             |

pub mod molecule;
pub mod signal;
pub mod store;


pub use molecule::{Molecule, NewMolecule, Target};
pub use signal::Signal;
pub use store::{Delivery, MoleculeStore};
