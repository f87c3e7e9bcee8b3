//! A stationary sphere owning up to two protocol roles.

use mc_core::{McError, McResult, MsgId, NanoMachineId, Position};
use mc_molecule::{Signal, Target};

use crate::{Receiver, RoleContext, Transmitter};

/// Which roles a machine carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Capability {
    TransmitOnly,
    ReceiveOnly,
    /// An intermediate node: both roles, driven independently.
    Both,
}

/// A fixed sphere in the medium that sends and/or receives molecules.
#[derive(Clone, Debug)]
pub struct NanoMachine {
    pub id:       NanoMachineId,
    pub position: Position,
    pub radius:   f64,
    tx: Option<Transmitter>,
    rx: Option<Receiver>,
}

impl NanoMachine {
    /// Fails if the machine has neither role or its geometry is invalid.
    pub fn new(
        id:       NanoMachineId,
        position: Position,
        radius:   f64,
        tx:       Option<Transmitter>,
        rx:       Option<Receiver>,
    ) -> McResult<Self> {
        if tx.is_none() && rx.is_none() {
            return Err(McError::Config(format!("{id} has neither a transmitter nor a receiver")));
        }
        if !position.is_finite() {
            return Err(McError::Config(format!("{id} position {position} is not finite")));
        }
        mc_core::error::check_radius("nanomachine", radius)?;
        Ok(Self { id, position, radius, tx, rx })
    }

    pub fn capability(&self) -> Capability {
        match (&self.tx, &self.rx) {
            (Some(_), Some(_)) => Capability::Both,
            (Some(_), None)    => Capability::TransmitOnly,
            // `new` rejects the role-less case.
            (None, _)          => Capability::ReceiveOnly,
        }
    }

    /// This machine as a delivery target.
    pub fn target(&self) -> Target {
        Target { machine: self.id, position: self.position, radius: self.radius }
    }

    // ── Run hooks ─────────────────────────────────────────────────────────

    pub fn start(&mut self, ctx: &mut RoleContext<'_>) {
        if let Some(tx) = self.tx.as_mut() {
            tx.start(ctx);
        }
        if let Some(rx) = self.rx.as_mut() {
            rx.start(ctx);
        }
    }

    pub fn next_step(&mut self, ctx: &mut RoleContext<'_>) {
        if let Some(tx) = self.tx.as_mut() {
            tx.next_step(ctx);
        }
        if let Some(rx) = self.rx.as_mut() {
            rx.next_step(ctx);
        }
    }

    /// Hand a delivered signal to the matching role.
    ///
    /// Returns `false` when this machine has no role for that signal kind;
    /// the molecule is consumed either way.
    pub fn receive(&mut self, signal: Signal, ctx: &mut RoleContext<'_>) -> bool {
        match signal {
            Signal::Information(id) => match self.rx.as_mut() {
                Some(rx) => {
                    rx.receive(id, ctx);
                    true
                }
                None => false,
            },
            Signal::Acknowledgement(id) => match self.tx.as_mut() {
                Some(tx) => {
                    tx.receive(id, ctx);
                    true
                }
                None => false,
            },
        }
    }

    // ── Role access ───────────────────────────────────────────────────────

    pub fn transmitter(&self) -> Option<&Transmitter> {
        self.tx.as_ref()
    }

    pub fn receiver(&self) -> Option<&Receiver> {
        self.rx.as_ref()
    }

    pub fn transmitter_message_id(&self) -> Option<MsgId> {
        self.tx.as_ref().map(Transmitter::curr_msg_id)
    }

    pub fn receiver_message_id(&self) -> Option<MsgId> {
        self.rx.as_ref().map(Receiver::curr_msg_id)
    }
}
