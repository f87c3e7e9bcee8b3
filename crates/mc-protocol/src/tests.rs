//! Unit tests for mc-protocol.

use std::sync::Arc;

use mc_core::{KineticClass, NanoMachineId, Position, RunConfig, Tick};
use mc_molecule::{MoleculeStore, Signal, Target};

use crate::{
    Adaptation, Capability, CommStatus, CompletionLog, MoleculeCreator, MoleculeParams,
    NanoMachine, Receiver, RoleContext, Transmitter,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const TX: NanoMachineId = NanoMachineId(0);
const RX: NanoMachineId = NanoMachineId(1);

fn config(acks: bool, credits: u32, wait: u32, messages: u32) -> RunConfig {
    RunConfig {
        num_messages:         messages,
        num_retransmissions:  credits,
        retransmit_wait:      wait,
        use_acknowledgements: acks,
        ..RunConfig::default()
    }
}

fn one_molecule() -> Vec<MoleculeParams> {
    vec![MoleculeParams::new(1, 1.0, KineticClass::Passive)]
}

fn targets(id: NanoMachineId) -> Arc<[Target]> {
    Arc::from(vec![Target { machine: id, position: Position::new(10.0, 0.0, 0.0), radius: 1.0 }])
}

fn transmitter(credits: u32) -> Transmitter {
    let creator = MoleculeCreator::information(TX, Position::ORIGIN, &one_molecule(), targets(RX)).unwrap();
    Transmitter::new(TX, creator, credits)
}

fn receiver(credits: u32, acks: bool) -> Receiver {
    let creator = acks.then(|| {
        MoleculeCreator::acknowledgement(RX, Position::ORIGIN, &one_molecule(), targets(TX)).unwrap()
    });
    Receiver::new(RX, creator, credits)
}

/// Owns the run state a role context borrows.
struct Harness {
    tick:   Tick,
    config: RunConfig,
    store:  MoleculeStore,
    log:    CompletionLog,
}

impl Harness {
    fn new(config: RunConfig) -> Self {
        let log = CompletionLog::new(config.num_messages);
        Self { tick: Tick::ZERO, config, store: MoleculeStore::new(7), log }
    }

    fn ctx(&mut self) -> RoleContext<'_> {
        RoleContext::new(self.tick, &self.config, &mut self.store, &mut self.log)
    }

    /// Signals created since the last call, in creation order.
    fn drain(&mut self) -> Vec<Signal> {
        self.store.admit_nascent();
        let out: Vec<_> = self.store.iter().map(|m| m.signal).collect();
        let ids: Vec<_> = self.store.iter().map(|m| m.id).collect();
        self.store.remove(&ids);
        out
    }
}

/// Drive a transmitter for `ticks` ticks after `start`, recording the ticks
/// on which it emitted.
fn tx_emission_ticks(h: &mut Harness, tx: &mut Transmitter, ticks: u64) -> Vec<u64> {
    let mut out = Vec::new();
    tx.start(&mut h.ctx());
    if !h.drain().is_empty() {
        out.push(0);
    }
    for t in 1..=ticks {
        h.tick = Tick(t);
        tx.next_step(&mut h.ctx());
        if !h.drain().is_empty() {
            out.push(t);
        }
    }
    out
}

// ── CompletionLog ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod completion_log {
    use super::*;

    #[test]
    fn last_message_flag() {
        let mut log = CompletionLog::new(2);
        log.completed_message(1, Tick(3), TX);
        assert!(!log.is_last_message_completed());
        log.completed_message(2, Tick(7), TX);
        assert!(log.is_last_message_completed());
        assert_eq!(log.len(), 2);
        assert_eq!(log.since(1)[0].msg_id, 2);
        assert!(log.since(5).is_empty());
    }
}

// ── MoleculeCreator ───────────────────────────────────────────────────────────

#[cfg(test)]
mod creator {
    use super::*;

    #[test]
    fn batch_uses_every_entry() {
        let params = vec![
            MoleculeParams::new(2, 1.0, KineticClass::Passive),
            MoleculeParams::new(3, 0.5, KineticClass::Active),
        ];
        let mut c = MoleculeCreator::information(TX, Position::ORIGIN, &params, targets(RX)).unwrap();
        let mut store = MoleculeStore::new(0);
        assert_eq!(c.create_batch(CommStatus::None, 4, Tick(0), &mut store), 5);
        assert_eq!(store.nascent_len(), 5);
        store.admit_nascent();
        assert!(store.iter().all(|m| m.signal == Signal::Information(4) && m.source == TX));
    }

    #[test]
    fn ack_creator_tags_acknowledgements() {
        let mut c = MoleculeCreator::acknowledgement(RX, Position::ORIGIN, &one_molecule(), targets(TX)).unwrap();
        let mut store = MoleculeStore::new(0);
        c.create_batch(CommStatus::Success, 2, Tick(5), &mut store);
        store.admit_nascent();
        let m = store.iter().next().unwrap();
        assert_eq!(m.signal, Signal::Acknowledgement(2));
        assert_eq!(m.created, Tick(5));
    }

    #[test]
    fn additive_grows_on_failure_and_resets_on_success() {
        let params = vec![
            MoleculeParams::new(1, 1.0, KineticClass::Passive)
                .with_adaptation(Adaptation::Additive { step: 2, max: 5 }),
        ];
        let mut c = MoleculeCreator::information(TX, Position::ORIGIN, &params, targets(RX)).unwrap();
        let mut store = MoleculeStore::new(0);
        let sizes: Vec<usize> = [
            CommStatus::None,
            CommStatus::Failure,
            CommStatus::Failure,
            CommStatus::Failure,
            CommStatus::None,
            CommStatus::Success,
        ]
        .into_iter()
        .map(|s| c.create_batch(s, 1, Tick(0), &mut store))
        .collect();
        assert_eq!(sizes, vec![1, 3, 5, 5, 5, 1]);
        assert_eq!(c.current_batch_size(), 1);
    }

    #[test]
    fn fixed_ignores_feedback() {
        let mut c = MoleculeCreator::information(TX, Position::ORIGIN, &one_molecule(), targets(RX)).unwrap();
        let mut store = MoleculeStore::new(0);
        assert_eq!(c.create_batch(CommStatus::Failure, 1, Tick(0), &mut store), 1);
    }

    #[test]
    fn rejects_bad_params() {
        assert!(MoleculeCreator::information(TX, Position::ORIGIN, &[], targets(RX)).is_err());
        let zero = [MoleculeParams::new(0, 1.0, KineticClass::Passive)];
        assert!(MoleculeCreator::information(TX, Position::ORIGIN, &zero, targets(RX)).is_err());
        let bad_radius = [MoleculeParams::new(1, -1.0, KineticClass::Passive)];
        assert!(MoleculeCreator::information(TX, Position::ORIGIN, &bad_radius, targets(RX)).is_err());
        let bad_max = [MoleculeParams::new(4, 1.0, KineticClass::Passive)
            .with_adaptation(Adaptation::Additive { step: 1, max: 2 })];
        assert!(MoleculeCreator::information(TX, Position::ORIGIN, &bad_max, targets(RX)).is_err());
    }
}

// ── Transmitter ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod transmitter {
    use super::*;

    #[test]
    fn credits_bound_retransmissions() {
        let mut h = Harness::new(config(true, 2, 3, 1));
        let mut tx = transmitter(2);
        let ticks = tx_emission_ticks(&mut h, &mut tx, 30);
        assert_eq!(ticks, vec![0, 3, 6]);
        assert_eq!(tx.batches_sent(), 3);
        assert_eq!(tx.retransmissions_left(), 0);
        assert_eq!(tx.last_status(), CommStatus::Failure);
        assert!(tx.is_abandoned());
        assert!(h.log.is_empty());
    }

    #[test]
    fn no_ack_mode_advances_on_timeout() {
        let mut h = Harness::new(config(false, 5, 3, 3));
        let mut tx = transmitter(5);
        let mut ids = Vec::new();
        tx.start(&mut h.ctx());
        ids.extend(h.drain());
        for t in 1..=9 {
            h.tick = Tick(t);
            tx.next_step(&mut h.ctx());
            ids.extend(h.drain());
        }
        let ids: Vec<_> = ids.iter().map(|s| s.msg_id()).collect();
        // Sticks at the last message once reached.
        assert_eq!(ids, vec![1, 2, 3, 3]);
        assert_eq!(tx.last_status(), CommStatus::Success);
        assert_eq!(tx.retransmissions_left(), 5);
    }

    #[test]
    fn matching_ack_completes_and_defers_next() {
        let mut h = Harness::new(config(true, 2, 10, 2));
        let mut tx = transmitter(2);
        tx.start(&mut h.ctx());
        h.drain();

        h.tick = Tick(3);
        tx.receive(1, &mut h.ctx());
        assert_eq!(tx.curr_msg_id(), 2);
        assert!(tx.is_deferred());
        assert_eq!(tx.last_status(), CommStatus::Success);
        assert_eq!(h.log.events()[0].tick, Tick(3));
        assert_eq!(h.log.events()[0].machine, TX);

        h.tick = Tick(4);
        tx.next_step(&mut h.ctx());
        assert!(!tx.is_deferred());
        assert_eq!(h.drain(), vec![Signal::Information(2)]);
        assert_eq!(tx.countdown(), 10);
    }

    #[test]
    fn mismatched_ack_spends_a_credit() {
        let mut h = Harness::new(config(true, 1, 10, 2));
        let mut tx = transmitter(1);
        tx.start(&mut h.ctx());
        h.drain();

        tx.receive(0, &mut h.ctx());
        assert_eq!(tx.retransmissions_left(), 0);
        assert_eq!(tx.last_status(), CommStatus::Failure);
        assert!(tx.is_deferred());
        assert_eq!(tx.curr_msg_id(), 1);

        // Out of credits: further stale acks are ignored.
        h.tick = Tick(1);
        tx.next_step(&mut h.ctx());
        h.drain();
        tx.receive(0, &mut h.ctx());
        assert!(!tx.is_deferred());
    }

    #[test]
    fn goes_quiet_after_last_message() {
        let mut h = Harness::new(config(true, 3, 2, 1));
        let mut tx = transmitter(3);
        tx.start(&mut h.ctx());
        h.drain();
        tx.receive(1, &mut h.ctx());
        assert!(h.log.is_last_message_completed());
        assert!(!tx.is_deferred());
        for t in 1..=10 {
            h.tick = Tick(t);
            tx.next_step(&mut h.ctx());
        }
        assert!(h.drain().is_empty());
        assert_eq!(tx.batches_sent(), 1);
    }
}

// ── Receiver ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod receiver {
    use super::*;

    #[test]
    fn accepts_only_the_next_id() {
        let mut h = Harness::new(config(true, 5, 10, 5));
        let mut rx = receiver(5, true);
        rx.start(&mut h.ctx());

        for id in [2, 1, 1, 3, 2, 4, 3] {
            let before = rx.curr_msg_id();
            rx.receive(id, &mut h.ctx());
            assert!(rx.curr_msg_id() == before || rx.curr_msg_id() == before + 1);
        }
        assert_eq!(rx.curr_msg_id(), 3);
    }

    #[test]
    fn acceptance_defers_an_ack_for_that_id() {
        let mut h = Harness::new(config(true, 2, 10, 2));
        let mut rx = receiver(2, true);
        rx.start(&mut h.ctx());
        assert!(h.drain().is_empty());

        h.tick = Tick(1);
        rx.next_step(&mut h.ctx());
        rx.receive(1, &mut h.ctx());
        assert!(rx.is_deferred());
        assert_eq!(rx.last_status(), CommStatus::Success);
        assert!(h.log.is_empty());

        h.tick = Tick(2);
        rx.next_step(&mut h.ctx());
        assert_eq!(h.drain(), vec![Signal::Acknowledgement(1)]);
    }

    #[test]
    fn out_of_order_reacknowledges_last_good_id() {
        let mut h = Harness::new(config(true, 2, 10, 3));
        let mut rx = receiver(2, true);
        rx.start(&mut h.ctx());
        rx.receive(1, &mut h.ctx());
        rx.next_step(&mut h.ctx());
        h.drain();

        rx.receive(3, &mut h.ctx());
        assert_eq!(rx.last_status(), CommStatus::Failure);
        assert_eq!(rx.retransmissions_left(), 1);
        rx.next_step(&mut h.ctx());
        assert_eq!(h.drain(), vec![Signal::Acknowledgement(1)]);
    }

    #[test]
    fn idle_timeout_spends_credits() {
        let mut h = Harness::new(config(true, 1, 3, 1));
        let mut rx = receiver(1, true);
        rx.start(&mut h.ctx());
        let mut emitted = Vec::new();
        for t in 1..=12 {
            h.tick = Tick(t);
            rx.next_step(&mut h.ctx());
            if !h.drain().is_empty() {
                emitted.push(t);
            }
        }
        assert_eq!(emitted, vec![3]);
        assert_eq!(rx.retransmissions_left(), 0);
    }

    #[test]
    fn without_acks_reports_completion_itself() {
        let mut h = Harness::new(config(false, 2, 3, 1));
        let mut rx = receiver(2, false);
        rx.start(&mut h.ctx());
        h.tick = Tick(4);
        rx.receive(1, &mut h.ctx());
        assert!(!rx.is_deferred());
        assert_eq!(h.log.events()[0].machine, RX);
        assert!(h.log.is_last_message_completed());

        // Purely reactive: never emits, duplicates are ignored.
        rx.receive(1, &mut h.ctx());
        for t in 5..=20 {
            h.tick = Tick(t);
            rx.next_step(&mut h.ctx());
        }
        assert!(h.drain().is_empty());
        assert_eq!(rx.retransmissions_left(), 2);
    }
}

// ── NanoMachine ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod nanomachine {
    use super::*;

    #[test]
    fn needs_at_least_one_role() {
        assert!(NanoMachine::new(TX, Position::ORIGIN, 1.0, None, None).is_err());
        assert!(NanoMachine::new(TX, Position::ORIGIN, 0.0, Some(transmitter(1)), None).is_err());
    }

    #[test]
    fn capability_and_ids() {
        let both = NanoMachine::new(TX, Position::ORIGIN, 1.0, Some(transmitter(1)), Some(receiver(1, true))).unwrap();
        assert_eq!(both.capability(), Capability::Both);
        assert_eq!(both.transmitter_message_id(), Some(1));
        assert_eq!(both.receiver_message_id(), Some(0));

        let rx_only = NanoMachine::new(RX, Position::ORIGIN, 1.0, None, Some(receiver(1, true))).unwrap();
        assert_eq!(rx_only.capability(), Capability::ReceiveOnly);
        assert_eq!(rx_only.transmitter_message_id(), None);
        assert_eq!(rx_only.target().machine, RX);
    }

    #[test]
    fn signal_routed_by_kind() {
        let mut h = Harness::new(config(true, 2, 10, 2));
        let mut rx_only = NanoMachine::new(RX, Position::ORIGIN, 1.0, None, Some(receiver(2, true))).unwrap();
        rx_only.start(&mut h.ctx());
        assert!(!rx_only.receive(Signal::Acknowledgement(1), &mut h.ctx()));
        assert!(rx_only.receive(Signal::Information(1), &mut h.ctx()));
        assert_eq!(rx_only.receiver_message_id(), Some(1));
    }
}
