//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use mc_core::{NanoMachineId, Position, RunConfig, Tick};
use mc_medium::Medium;
use mc_molecule::{MoleculeStore, Target};
use mc_protocol::{CompletionLog, MoleculeCreator, MoleculeParams, NanoMachine, Receiver, Transmitter};
use serde::{Deserialize, Serialize};

use crate::{Sim, SimError, SimResult};

/// Where one role releases its batches and what they are made of.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleSpec {
    pub release:   Position,
    pub molecules: Vec<MoleculeParams>,
}

impl RoleSpec {
    pub fn new(release: Position, molecules: Vec<MoleculeParams>) -> Self {
        Self { release, molecules }
    }
}

/// A nanomachine before it is wired to its peers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineSpec {
    pub position: Position,
    pub radius:   f64,
    #[serde(default)]
    pub transmitter: Option<RoleSpec>,
    #[serde(default)]
    pub receiver: Option<RoleSpec>,
}

impl MachineSpec {
    pub fn is_transmitter(&self) -> bool {
        self.transmitter.is_some()
    }

    pub fn is_receiver(&self) -> bool {
        self.receiver.is_some()
    }
}

/// Fluent builder for [`Sim`].
///
/// Machines get sequential `NanoMachineId`s in the order they are added.
/// `build()` wires every information creator to all receivers and every
/// acknowledgement creator to all transmitters (a machine never targets
/// itself).
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default            |
/// |---------------|--------------------|
/// | `.medium(m)`  | `Medium::empty()`  |
pub struct SimBuilder {
    config:   RunConfig,
    machines: Vec<MachineSpec>,
    medium:   Option<Medium>,
}

impl SimBuilder {
    pub fn new(config: RunConfig) -> Self {
        Self { config, machines: Vec::new(), medium: None }
    }

    /// Supply the microtubule layout.  Without one, active molecules simply
    /// diffuse.
    pub fn medium(mut self, medium: Medium) -> Self {
        self.medium = Some(medium);
        self
    }

    pub fn add_machine(&mut self, spec: MachineSpec) -> NanoMachineId {
        let id = NanoMachineId(self.machines.len() as u32);
        self.machines.push(spec);
        id
    }

    pub fn add_transmitter(&mut self, position: Position, radius: f64, info: RoleSpec) -> NanoMachineId {
        self.add_machine(MachineSpec { position, radius, transmitter: Some(info), receiver: None })
    }

    /// `ack` is only used when the run has acknowledgements enabled.
    pub fn add_receiver(&mut self, position: Position, radius: f64, ack: RoleSpec) -> NanoMachineId {
        self.add_machine(MachineSpec { position, radius, transmitter: None, receiver: Some(ack) })
    }

    /// A machine that both transmits and receives.
    pub fn add_intermediate(
        &mut self,
        position: Position,
        radius:   f64,
        info:     RoleSpec,
        ack:      RoleSpec,
    ) -> NanoMachineId {
        self.add_machine(MachineSpec { position, radius, transmitter: Some(info), receiver: Some(ack) })
    }

    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }

    /// Validate inputs, wire the destination lists, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        if !self.machines.iter().any(MachineSpec::is_transmitter) {
            return Err(SimError::Config("scenario has no transmitter".into()));
        }

        let all_targets: Vec<Target> = self
            .machines
            .iter()
            .enumerate()
            .map(|(i, m)| Target { machine: NanoMachineId(i as u32), position: m.position, radius: m.radius })
            .collect();

        // Destination list for machine `me`: every other machine with the role.
        let peers = |me: usize, has_role: fn(&MachineSpec) -> bool| -> Arc<[Target]> {
            self.machines
                .iter()
                .zip(&all_targets)
                .enumerate()
                .filter(|&(i, (m, _))| i != me && has_role(m))
                .map(|(_, (_, t))| *t)
                .collect()
        };

        let credits = self.config.num_retransmissions;
        let mut machines = Vec::with_capacity(self.machines.len());
        for (i, spec) in self.machines.iter().enumerate() {
            let id = NanoMachineId(i as u32);

            let tx = match &spec.transmitter {
                Some(role) => {
                    let receivers = peers(i, MachineSpec::is_receiver);
                    let creator = MoleculeCreator::information(id, role.release, &role.molecules, receivers)?;
                    Some(Transmitter::new(id, creator, credits))
                }
                None => None,
            };

            let rx = match &spec.receiver {
                Some(role) => {
                    let creator = if self.config.use_acknowledgements {
                        let transmitters = peers(i, MachineSpec::is_transmitter);
                        Some(MoleculeCreator::acknowledgement(id, role.release, &role.molecules, transmitters)?)
                    } else {
                        None
                    };
                    Some(Receiver::new(id, creator, credits))
                }
                None => None,
            };

            machines.push(NanoMachine::new(id, spec.position, spec.radius, tx, rx)?);
        }

        let medium = self.medium.unwrap_or_else(Medium::empty);

        log::info!(
            "built sim: {} nanomachines, {} tracks, {} messages, acknowledgements {}",
            machines.len(),
            medium.track_count(),
            self.config.num_messages,
            if self.config.use_acknowledgements { "on" } else { "off" },
        );

        Ok(Sim {
            completions: CompletionLog::new(self.config.num_messages),
            molecules:   MoleculeStore::new(self.config.seed),
            tick:        Tick::ZERO,
            config:      self.config,
            machines,
            medium,
        })
    }
}
