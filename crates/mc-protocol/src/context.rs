//! Per-tick context handed to roles, and the completion log.

use mc_core::{MsgId, NanoMachineId, RunConfig, Tick};
use mc_molecule::MoleculeStore;

/// A message that got across, as reported by the role that learned of it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub msg_id:  MsgId,
    pub tick:    Tick,
    /// The nanomachine whose role reported it (the transmitter in
    /// acknowledged mode, the receiver otherwise).
    pub machine: NanoMachineId,
}

/// Append-only record of completed messages.
///
/// A message whose retransmission credits ran out simply never appears here.
#[derive(Debug, Default)]
pub struct CompletionLog {
    num_messages:   MsgId,
    events:         Vec<Completion>,
    last_completed: bool,
}

impl CompletionLog {
    /// `num_messages` is the id of the last message of the run.
    pub fn new(num_messages: MsgId) -> Self {
        Self { num_messages, events: Vec::new(), last_completed: false }
    }

    /// Record that `msg_id` completed at `tick`.
    pub fn completed_message(&mut self, msg_id: MsgId, tick: Tick, machine: NanoMachineId) {
        log::info!("{tick}: message {msg_id} completed (reported by {machine})");
        self.events.push(Completion { msg_id, tick, machine });
        if msg_id >= self.num_messages {
            self.last_completed = true;
        }
    }

    /// `true` once the run's last message id has been completed.
    #[inline]
    pub fn is_last_message_completed(&self) -> bool {
        self.last_completed
    }

    /// Every completion so far, in the order reported.
    pub fn events(&self) -> &[Completion] {
        &self.events
    }

    /// Completions recorded after the first `n`.
    pub fn since(&self, n: usize) -> &[Completion] {
        self.events.get(n..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Mutable run state a role may touch during one tick.
///
/// Built by the orchestrator around its own fields; roles never see the
/// nanomachine roster or the medium.
pub struct RoleContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Run configuration (message count, credits, wait, ack mode, …).
    pub config: &'a RunConfig,

    /// New batches are registered here.
    pub molecules: &'a mut MoleculeStore,

    /// Completed messages are reported here.
    pub completions: &'a mut CompletionLog,
}

impl<'a> RoleContext<'a> {
    #[inline]
    pub fn new(
        tick:        Tick,
        config:      &'a RunConfig,
        molecules:   &'a mut MoleculeStore,
        completions: &'a mut CompletionLog,
    ) -> Self {
        Self { tick, config, molecules, completions }
    }
}
