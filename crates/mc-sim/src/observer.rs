//! Simulation observer trait for progress reporting and data collection.

use mc_core::Tick;
use mc_protocol::Completion;

/// Per-tick molecule counts handed to [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub tick: Tick,

    /// Molecules created during the emission phase.
    pub emitted: usize,

    /// Molecules that reached a destination (and were removed).
    pub delivered: usize,

    /// Molecules in the medium after this tick's newcomers were admitted.
    pub in_flight: usize,
}

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and
/// [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} molecules in flight", summary.in_flight);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per message completion, after the tick's delivery phase.
    fn on_message_completed(&mut self, _completion: &Completion) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called once by `run` after the final tick.  `final_tick` is the
    /// first tick that was *not* simulated.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
