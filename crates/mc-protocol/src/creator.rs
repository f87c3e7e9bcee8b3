//! Builds the molecule batches a role emits.

use std::sync::Arc;

use mc_core::{McError, McResult, MsgId, NanoMachineId, Position, Tick};
use mc_molecule::{MoleculeStore, NewMolecule, Signal, Target};

use crate::{Adaptation, CommStatus, MoleculeParams};

/// A parameter entry plus its current (possibly adapted) batch size.
#[derive(Clone, Debug)]
struct BatchEntry {
    params:  MoleculeParams,
    current: u32,
}

impl BatchEntry {
    fn adapt(&mut self, status: CommStatus) {
        match (self.params.adaptation, status) {
            (Adaptation::Fixed, _) | (_, CommStatus::None) => {}
            (Adaptation::Additive { step, max }, CommStatus::Failure) => {
                self.current = self.current.saturating_add(step).min(max);
            }
            (Adaptation::Additive { .. }, CommStatus::Success) => {
                self.current = self.params.count;
            }
        }
    }
}

/// Batch factory owned by a transmitter or receiver role.
///
/// Release point, signal kind, source and destination list are fixed at
/// construction; only the message id and the feedback status vary per call.
#[derive(Clone, Debug)]
pub struct MoleculeCreator {
    source:       NanoMachineId,
    release:      Position,
    make_signal:  fn(MsgId) -> Signal,
    destinations: Arc<[Target]>,
    entries:      Vec<BatchEntry>,
}

impl MoleculeCreator {
    /// Factory for information molecules addressed to `receivers`.
    pub fn information(
        source:    NanoMachineId,
        release:   Position,
        params:    &[MoleculeParams],
        receivers: Arc<[Target]>,
    ) -> McResult<Self> {
        Self::new(source, release, Signal::Information, params, receivers)
    }

    /// Factory for acknowledgement molecules addressed to `transmitters`.
    pub fn acknowledgement(
        source:       NanoMachineId,
        release:      Position,
        params:       &[MoleculeParams],
        transmitters: Arc<[Target]>,
    ) -> McResult<Self> {
        Self::new(source, release, Signal::Acknowledgement, params, transmitters)
    }

    fn new(
        source:       NanoMachineId,
        release:      Position,
        make_signal:  fn(MsgId) -> Signal,
        params:       &[MoleculeParams],
        destinations: Arc<[Target]>,
    ) -> McResult<Self> {
        if params.is_empty() {
            return Err(McError::Config(format!(
                "{source}: a molecule creator needs at least one parameter entry"
            )));
        }
        if !release.is_finite() {
            return Err(McError::Config(format!("{source}: release point {release} is not finite")));
        }
        let entries = params
            .iter()
            .map(|p| p.validate().map(|()| BatchEntry { params: *p, current: p.count }))
            .collect::<McResult<Vec<_>>>()?;
        Ok(Self { source, release, make_signal, destinations, entries })
    }

    /// Create one batch carrying `msg_id`, register it in `store`, and
    /// return how many molecules were created.
    pub fn create_batch(
        &mut self,
        last_status: CommStatus,
        msg_id:      MsgId,
        tick:        Tick,
        store:       &mut MoleculeStore,
    ) -> usize {
        let signal = (self.make_signal)(msg_id);
        let mut created = 0;
        for entry in &mut self.entries {
            entry.adapt(last_status);
            for _ in 0..entry.current {
                store.spawn(NewMolecule {
                    signal,
                    radius:       entry.params.radius,
                    position:     self.release,
                    class:        entry.params.class,
                    source:       self.source,
                    destinations: Arc::clone(&self.destinations),
                    created:      tick,
                });
                created += 1;
            }
        }
        created
    }

    /// Molecules the next batch would contain if no feedback arrives.
    pub fn current_batch_size(&self) -> u32 {
        self.entries.iter().map(|e| e.current).sum()
    }

    #[inline]
    pub fn release_point(&self) -> Position {
        self.release
    }

    #[inline]
    pub fn destinations(&self) -> &[Target] {
        &self.destinations
    }
}
