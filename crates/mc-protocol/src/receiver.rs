//! The receiving half of the reliability protocol.

use mc_core::{MsgId, NanoMachineId};

use crate::{CommStatus, MoleculeCreator, RoleContext};

/// The receiving half of the protocol.
///
/// `curr_msg_id` is the last message accepted; it only ever grows by one.
/// Without acknowledgements the receiver is purely reactive and owns no
/// batch factory.
#[derive(Clone, Debug)]
pub struct Receiver {
    machine:     NanoMachineId,
    creator:     Option<MoleculeCreator>,
    curr_msg_id: MsgId,
    credits:     u32,
    countdown:   u32,
    deferred:    bool,
    last_status: CommStatus,
    batches:     u64,
}

impl Receiver {
    /// `creator` builds acknowledgement batches; pass `None` when the run
    /// does not use acknowledgements.
    pub fn new(machine: NanoMachineId, creator: Option<MoleculeCreator>, max_retransmissions: u32) -> Self {
        Self {
            machine,
            creator,
            curr_msg_id: 0,
            credits:     max_retransmissions,
            countdown:   0,
            deferred:    false,
            last_status: CommStatus::None,
            batches:     0,
        }
    }

    /// First tick of the run: arm the countdown, send nothing.
    pub fn start(&mut self, ctx: &mut RoleContext<'_>) {
        self.countdown = ctx.config.retransmit_wait;
    }

    pub fn next_step(&mut self, ctx: &mut RoleContext<'_>) {
        if self.deferred {
            self.deferred = false;
            self.emit(ctx);
            return;
        }
        if !ctx.config.use_acknowledgements {
            return;
        }

        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 && self.credits > 0 {
            self.credits -= 1;
            self.last_status = CommStatus::Failure;
            log::debug!(
                "{}: {}: idle, re-acknowledging message {} ({} credits left)",
                ctx.tick, self.machine, self.curr_msg_id, self.credits
            );
            self.emit(ctx);
        }
    }

    /// An information molecule carrying `msg_id` reached this machine.
    pub fn receive(&mut self, msg_id: MsgId, ctx: &mut RoleContext<'_>) {
        let acks = ctx.config.use_acknowledgements;
        if msg_id == self.curr_msg_id + 1 {
            self.curr_msg_id = msg_id;
            self.last_status = CommStatus::Success;
            log::debug!("{}: {} accepted message {msg_id}", ctx.tick, self.machine);
            if acks {
                self.deferred = true;
                self.credits = ctx.config.num_retransmissions;
            } else {
                ctx.completions.completed_message(msg_id, ctx.tick, self.machine);
            }
        } else if acks && self.credits > 0 {
            self.credits -= 1;
            self.last_status = CommStatus::Failure;
            self.deferred = true;
        }
    }

    fn emit(&mut self, ctx: &mut RoleContext<'_>) {
        self.countdown = ctx.config.retransmit_wait;
        let Some(creator) = self.creator.as_mut() else {
            return;
        };
        let n = creator.create_batch(self.last_status, self.curr_msg_id, ctx.tick, ctx.molecules);
        self.batches += 1;
        log::debug!(
            "{}: {} sent {n} acknowledgement molecules for message {}",
            ctx.tick, self.machine, self.curr_msg_id
        );
    }

    #[inline] pub fn machine(&self) -> NanoMachineId { self.machine }
    #[inline] pub fn curr_msg_id(&self) -> MsgId { self.curr_msg_id }
    #[inline] pub fn retransmissions_left(&self) -> u32 { self.credits }
    #[inline] pub fn countdown(&self) -> u32 { self.countdown }
    #[inline] pub fn is_deferred(&self) -> bool { self.deferred }
    #[inline] pub fn last_status(&self) -> CommStatus { self.last_status }
    #[inline] pub fn batches_sent(&self) -> u64 { self.batches }

    pub fn creator(&self) -> Option<&MoleculeCreator> {
        self.creator.as_ref()
    }
}
