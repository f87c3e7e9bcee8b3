//! The `Sim` struct and its tick loop.

use mc_core::{MsgId, NanoMachineId, RunConfig, Tick};
use mc_medium::Medium;
use mc_molecule::{Molecule, MoleculeStore};
use mc_movement::MoveContext;
use mc_protocol::{Completion, CompletionLog, NanoMachine, RoleContext};

use crate::{SimObserver, TickSummary};

/// The main simulation runner.
///
/// `Sim` owns all simulation state and drives the four-phase tick loop
/// described in the [crate docs](crate):
///
/// 1. **Emission**: every nanomachine starts (tick 0) or steps (later
///    ticks), in ascending id order.
/// 2. **Movement** (optionally parallel with the `parallel` feature).
/// 3. **Delivery** (sequential, ascending `MoleculeId` for determinism).
/// 4. **Cleanup**: delivered molecules leave, nascent ones are admitted.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (validated by the builder).
    pub config: RunConfig,

    /// Microtubule layout.  May be empty.
    pub medium: Medium,

    pub(crate) machines:    Vec<NanoMachine>,
    pub(crate) molecules:   MoleculeStore,
    pub(crate) completions: CompletionLog,
    pub(crate) tick:        Tick,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Step until [`is_finished`](Self::is_finished).  Returns the first
    /// tick that was not simulated.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Tick {
        while !self.is_finished() {
            self.step(observer);
        }
        log::info!(
            "run ended at {}: {} of {} messages completed",
            self.tick,
            self.completions.len(),
            self.config.num_messages,
        );
        observer.on_sim_end(self.tick);
        self.tick
    }

    /// Run exactly `n` ticks from the current position, finished or not.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Run one tick.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> TickSummary {
        let now = self.tick;
        observer.on_tick_start(now);
        let completed_before = self.completions.len();

        // ── Phase 1: emission ─────────────────────────────────────────────
        let emitted = self.emission_phase(now);

        // ── Phase 2: movement ─────────────────────────────────────────────
        //
        // Only in-flight molecules move; this tick's batches are still
        // nascent.
        let move_ctx = MoveContext::from_config(&self.config, &self.medium);
        self.molecules.advance_all(&move_ctx);

        // ── Phase 3: delivery ─────────────────────────────────────────────
        let delivered = self.delivery_phase(now);

        // ── Phase 4: cleanup ──────────────────────────────────────────────
        self.molecules.admit_nascent();

        for completion in self.completions.since(completed_before) {
            observer.on_message_completed(completion);
        }
        let summary = TickSummary { tick: now, emitted, delivered, in_flight: self.molecules.len() };
        observer.on_tick_end(now, &summary);

        self.tick = now.next();
        summary
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn is_last_message_completed(&self) -> bool {
        self.completions.is_last_message_completed()
    }

    /// Last message completed or `max_ticks` reached.
    pub fn is_finished(&self) -> bool {
        self.is_last_message_completed() || self.tick >= self.config.end_tick()
    }

    /// Every completion so far, in the order reported.
    pub fn completions(&self) -> &[Completion] {
        self.completions.events()
    }

    /// The next tick to be simulated.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Molecules currently in the medium, in creation order.
    pub fn live_molecules(&self) -> impl Iterator<Item = &Molecule> + '_ {
        self.molecules.iter()
    }

    pub fn live_molecule_count(&self) -> usize {
        self.molecules.len()
    }

    /// Molecules created since the run began, delivered or not.
    pub fn molecules_created(&self) -> u64 {
        self.molecules.created_total()
    }

    pub fn machines(&self) -> &[NanoMachine] {
        &self.machines
    }

    pub fn machine(&self, id: NanoMachineId) -> Option<&NanoMachine> {
        self.machines.get(id.index())
    }

    /// The message the machine's transmitter is working on, if it has one.
    pub fn transmitter_message_id(&self, id: NanoMachineId) -> Option<MsgId> {
        self.machine(id).and_then(NanoMachine::transmitter_message_id)
    }

    /// The last message the machine's receiver accepted, if it has one.
    pub fn receiver_message_id(&self, id: NanoMachineId) -> Option<MsgId> {
        self.machine(id).and_then(NanoMachine::receiver_message_id)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn emission_phase(&mut self, now: Tick) -> usize {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let config      = &self.config;
        let molecules   = &mut self.molecules;
        let completions = &mut self.completions;

        let before = molecules.nascent_len();
        for machine in &mut self.machines {
            let mut ctx = RoleContext::new(now, config, molecules, completions);
            if now == Tick::ZERO {
                machine.start(&mut ctx);
            } else {
                machine.next_step(&mut ctx);
            }
        }
        molecules.nascent_len() - before
    }

    fn delivery_phase(&mut self, now: Tick) -> usize {
        let deliveries = self.molecules.deliveries();
        if deliveries.is_empty() {
            return 0;
        }

        let config      = &self.config;
        let molecules   = &mut self.molecules;
        let completions = &mut self.completions;

        for d in &deliveries {
            let Some(machine) = self.machines.get_mut(d.destination.index()) else {
                continue;
            };
            let mut ctx = RoleContext::new(now, config, molecules, completions);
            if machine.receive(d.signal, &mut ctx) {
                log::debug!("{now}: {} delivered {} to {}", d.molecule, d.signal, d.destination);
            } else {
                log::debug!("{now}: {} absorbed {} without effect", d.destination, d.signal);
            }
        }

        let ids: Vec<_> = deliveries.iter().map(|d| d.molecule).collect();
        molecules.remove(&ids)
    }
}
