//! `Transmitter` — the sending half of the reliability protocol.

use mc_core::{MsgId, NanoMachineId};

use crate::{CommStatus, MoleculeCreator, RoleContext};

/// Sends messages `1..=num_messages` in order.
///
/// In acknowledged mode a message is retransmitted every `retransmit_wait`
/// ticks until its acknowledgement arrives or the credits run out.  Without
/// acknowledgements an elapsed wait counts as delivery and the next message
/// goes out.
#[derive(Clone, Debug)]
pub struct Transmitter {
    machine:     NanoMachineId,
    creator:     MoleculeCreator,
    curr_msg_id: MsgId,
    credits:     u32,
    countdown:   u32,
    deferred:    bool,
    last_status: CommStatus,
    abandoned:   bool,
    batches:     u64,
}

impl Transmitter {
    pub fn new(machine: NanoMachineId, creator: MoleculeCreator, max_retransmissions: u32) -> Self {
        Self {
            machine,
            creator,
            curr_msg_id: 1,
            credits:     max_retransmissions,
            countdown:   0,
            deferred:    false,
            last_status: CommStatus::None,
            abandoned:   false,
            batches:     0,
        }
    }

    // ── Run hooks ─────────────────────────────────────────────────────────

    /// First tick of the run: send message 1.
    pub fn start(&mut self, ctx: &mut RoleContext<'_>) {
        self.emit(ctx);
    }

    pub fn next_step(&mut self, ctx: &mut RoleContext<'_>) {
        if self.is_done(ctx) {
            return;
        }
        if self.deferred {
            self.deferred = false;
            self.emit(ctx);
            return;
        }

        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return;
        }

        if ctx.config.use_acknowledgements {
            self.last_status = CommStatus::Failure;
            if self.credits > 0 {
                self.credits -= 1;
                log::debug!(
                    "{}: {}: no ack for message {}, retransmitting ({} credits left)",
                    ctx.tick, self.machine, self.curr_msg_id, self.credits
                );
                self.emit(ctx);
            } else if !self.abandoned {
                self.abandoned = true;
                log::warn!(
                    "{}: {}: retransmissions exhausted for message {}",
                    ctx.tick, self.machine, self.curr_msg_id
                );
            }
        } else {
            self.last_status = CommStatus::Success;
            if self.curr_msg_id < ctx.config.num_messages {
                self.curr_msg_id += 1;
            }
            self.emit(ctx);
        }
    }

    /// An acknowledgement molecule carrying `msg_id` reached this machine.
    pub fn receive(&mut self, msg_id: MsgId, ctx: &mut RoleContext<'_>) {
        if self.is_done(ctx) {
            return;
        }
        if msg_id == self.curr_msg_id {
            self.last_status = CommStatus::Success;
            ctx.completions.completed_message(msg_id, ctx.tick, self.machine);
            self.curr_msg_id += 1;
            self.abandoned = false;
            if !ctx.completions.is_last_message_completed() {
                self.deferred = true;
                self.credits = ctx.config.num_retransmissions;
            }
        } else if self.credits > 0 {
            log::debug!(
                "{}: {}: stale ack {msg_id} while sending {}",
                ctx.tick, self.machine, self.curr_msg_id
            );
            self.credits -= 1;
            self.last_status = CommStatus::Failure;
            self.deferred = true;
        }
    }

    fn emit(&mut self, ctx: &mut RoleContext<'_>) {
        let n = self
            .creator
            .create_batch(self.last_status, self.curr_msg_id, ctx.tick, ctx.molecules);
        self.countdown = ctx.config.retransmit_wait;
        self.batches += 1;
        log::debug!(
            "{}: {} sent {n} information molecules for message {}",
            ctx.tick, self.machine, self.curr_msg_id
        );
    }

    /// Every message has been sent (no-ack mode never gets here).
    fn is_done(&self, ctx: &RoleContext<'_>) -> bool {
        self.curr_msg_id > ctx.config.num_messages
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline] pub fn machine(&self) -> NanoMachineId { self.machine }
    #[inline] pub fn curr_msg_id(&self) -> MsgId { self.curr_msg_id }
    #[inline] pub fn retransmissions_left(&self) -> u32 { self.credits }
    #[inline] pub fn countdown(&self) -> u32 { self.countdown }
    #[inline] pub fn is_deferred(&self) -> bool { self.deferred }
    #[inline] pub fn last_status(&self) -> CommStatus { self.last_status }

    /// Credits ran out before the current message was acknowledged.
    #[inline] pub fn is_abandoned(&self) -> bool { self.abandoned }

    /// Batches emitted so far, retransmissions included.
    #[inline] pub fn batches_sent(&self) -> u64 { self.batches }

    pub fn creator(&self) -> &MoleculeCreator {
        &self.creator
    }
}
