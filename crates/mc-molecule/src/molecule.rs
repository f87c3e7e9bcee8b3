//! A single molecule and its delivery test.

use std::sync::Arc;

use mc_core::{KineticClass, MoleculeId, MoleculeRng, NanoMachineId, Position, Tick};
use mc_movement::{Kinetics, MoveContext};

use crate::Signal;

/// A destination a molecule can be delivered to.
///
/// Nanomachines never move, so the batch factory snapshots their position
/// and radius once and shares the list between all molecules it creates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Target {
    pub machine:  NanoMachineId,
    pub position: Position,
    pub radius:   f64,
}

/// Everything needed to create a molecule; the store assigns the id and RNG.
#[derive(Clone, Debug)]
pub struct NewMolecule {
    pub signal:       Signal,
    pub radius:       f64,
    pub position:     Position,
    pub class:        KineticClass,
    pub source:       NanoMachineId,
    pub destinations: Arc<[Target]>,
    pub created:      Tick,
}

/// A molecule in the medium.
#[derive(Clone, Debug)]
pub struct Molecule {
    pub id:       MoleculeId,
    pub signal:   Signal,
    pub radius:   f64,
    pub position: Position,
    pub source:   NanoMachineId,
    pub created:  Tick,
    kinetics:     Kinetics,
    destinations: Arc<[Target]>,
    rng:          MoleculeRng,
}

impl Molecule {
    pub(crate) fn new(id: MoleculeId, run_seed: u64, spec: NewMolecule) -> Self {
        Self {
            id,
            signal:       spec.signal,
            radius:       spec.radius,
            position:     spec.position,
            source:       spec.source,
            created:      spec.created,
            kinetics:     Kinetics::new(spec.class),
            destinations: spec.destinations,
            rng:          MoleculeRng::new(run_seed, id),
        }
    }

    #[inline]
    pub fn kinetics(&self) -> &Kinetics {
        &self.kinetics
    }

    /// The fixed candidate list, in the order it is tested.
    #[inline]
    pub fn destinations(&self) -> &[Target] {
        &self.destinations
    }

    /// Move one tick.
    pub fn advance(&mut self, ctx: &MoveContext<'_>) {
        self.position = self.kinetics.advance(self.position, self.radius, ctx, &mut self.rng);
    }

    /// The first destination (in list order) this molecule overlaps.
    ///
    /// Overlap is strict: `distance < r_molecule + r_target`.
    pub fn reached_destination(&self) -> Option<NanoMachineId> {
        self.destinations
            .iter()
            .find(|t| self.overlaps(t))
            .map(|t| t.machine)
    }

    #[inline]
    fn overlaps(&self, target: &Target) -> bool {
        self.position.distance(target.position) < self.radius + target.radius
    }
}
