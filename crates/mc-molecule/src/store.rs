//! Every molecule currently in the medium.

use mc_core::{MoleculeId, NanoMachineId};
use mc_movement::MoveContext;

use crate::{Molecule, NewMolecule, Signal};

/// A molecule that overlapped one of its destinations this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    pub molecule:    MoleculeId,
    pub destination: NanoMachineId,
    pub signal:      Signal,
}

/// Live molecules in creation order, plus those created this tick.
///
/// `in_flight` is always sorted by `MoleculeId` because ids are handed out
/// sequentially and nascent molecules are appended in creation order.  The
/// delivery phase relies on this for its stable ordering.
pub struct MoleculeStore {
    run_seed:  u64,
    next_id:   u64,
    in_flight: Vec<Molecule>,
    nascent:   Vec<Molecule>,
}

impl MoleculeStore {
    /// Create an empty store whose molecules are seeded from `run_seed`.
    pub fn new(run_seed: u64) -> Self {
        Self {
            run_seed,
            next_id:   0,
            in_flight: Vec::new(),
            nascent:   Vec::new(),
        }
    }

    /// Register a new molecule.  It joins the medium at the next
    /// [`admit_nascent`](Self::admit_nascent).
    pub fn spawn(&mut self, spec: NewMolecule) -> MoleculeId {
        let id = MoleculeId(self.next_id);
        self.next_id += 1;
        self.nascent.push(Molecule::new(id, self.run_seed, spec));
        id
    }

    /// Move every in-flight molecule one tick.
    ///
    /// With the `parallel` feature this runs on Rayon.  Each molecule owns
    /// its RNG, so the outcome does not depend on scheduling.
    pub fn advance_all(&mut self, ctx: &MoveContext<'_>) {
        #[cfg(not(feature = "parallel"))]
        {
            for m in &mut self.in_flight {
                m.advance(ctx);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.in_flight.par_iter_mut().for_each(|m| m.advance(ctx));
        }
    }

    /// Test every in-flight molecule against its destination list.
    ///
    /// Returned in ascending `MoleculeId` order.
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.in_flight
            .iter()
            .filter_map(|m| {
                m.reached_destination().map(|destination| Delivery {
                    molecule: m.id,
                    destination,
                    signal: m.signal,
                })
            })
            .collect()
    }

    /// Drop the given in-flight molecules.  `ids` must be sorted ascending,
    /// which [`deliveries`](Self::deliveries) guarantees.
    pub fn remove(&mut self, ids: &[MoleculeId]) -> usize {
        if ids.is_empty() {
            return 0;
        }
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        let before = self.in_flight.len();
        self.in_flight.retain(|m| ids.binary_search(&m.id).is_err());
        before - self.in_flight.len()
    }

    /// Move this tick's newly created molecules into flight.  Returns how
    /// many were admitted.
    pub fn admit_nascent(&mut self) -> usize {
        let n = self.nascent.len();
        self.in_flight.append(&mut self.nascent);
        n
    }

    /// In-flight molecules in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Molecule> + '_ {
        self.in_flight.iter()
    }

    pub fn get(&self, id: MoleculeId) -> Option<&Molecule> {
        self.in_flight
            .binary_search_by_key(&id, |m| m.id)
            .ok()
            .map(|i| &self.in_flight[i])
    }

    /// Number of molecules in flight (nascent ones excluded).
    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }

    /// Molecules created this tick and not yet admitted.
    pub fn nascent_len(&self) -> usize {
        self.nascent.len()
    }

    /// Total molecules ever created.
    pub fn created_total(&self) -> u64 {
        self.next_id
    }

    /// Number of in-flight molecules emitted by `source`.
    pub fn count_from(&self, source: NanoMachineId) -> usize {
        self.in_flight.iter().filter(|m| m.source == source).count()
    }
}
