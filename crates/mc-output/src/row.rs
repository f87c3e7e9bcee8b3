//! Plain data row types written by output backends.

use mc_protocol::Completion;
use mc_sim::TickSummary;

/// One message that got across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionRow {
    pub msg_id:  u32,
    pub tick:    u64,
    /// Id of the nanomachine that reported the completion.
    pub machine: u32,
}

impl From<&Completion> for CompletionRow {
    fn from(c: &Completion) -> Self {
        Self { msg_id: c.msg_id, tick: c.tick.0, machine: c.machine.0 }
    }
}

/// Molecule counts for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:      u64,
    pub emitted:   u64,
    pub delivered: u64,
    pub in_flight: u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:      s.tick.0,
            emitted:   s.emitted as u64,
            delivered: s.delivered as u64,
            in_flight: s.in_flight as u64,
        }
    }
}
