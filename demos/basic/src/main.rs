//! basic — a transmitter and a receiver exchanging three messages.
//!
//! Runs the embedded scenario, or the JSON scenario file given as the first
//! argument, and writes `completions.csv` / `tick_summaries.csv` to
//! `output/basic`.  Set `RUST_LOG=debug` to watch every emission and
//! delivery.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use mc_core::Tick;
use mc_output::{CsvWriter, OutputWriter, SimOutputObserver};
use mc_protocol::Completion;
use mc_sim::{Scenario, SimObserver, TickSummary};

const SCENARIO_JSON: &str = include_str!("../scenario.json");
const OUTPUT_DIR:    &str = "output/basic";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:          SimOutputObserver<W>,
    summary_rows:   usize,
    peak_in_flight: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, summary_rows: 0, peak_in_flight: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_message_completed(&mut self, completion: &Completion) {
        println!(
            "  message {} completed at {} (reported by {})",
            completion.msg_id, completion.tick, completion.machine
        );
        self.inner.on_message_completed(completion);
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.summary_rows += 1;
        self.peak_in_flight = self.peak_in_flight.max(summary.in_flight);
        self.inner.on_tick_end(tick, summary);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. Load the scenario.
    let scenario = match std::env::args().nth(1) {
        Some(path) => Scenario::load(&path).with_context(|| format!("loading scenario {path}"))?,
        None => Scenario::from_json(SCENARIO_JSON).context("parsing embedded scenario")?,
    };
    let config = scenario.config.clone();

    println!("=== basic — molecular communication ===");
    println!(
        "Machines: {}  |  Tracks: {}  |  Messages: {}  |  Acks: {}  |  Seed: {}",
        scenario.machines.len(),
        scenario.microtubules.len(),
        config.num_messages,
        if config.use_acknowledgements { "on" } else { "off" },
        config.seed,
    );
    println!();

    // 2. Build sim.
    let mut sim = scenario.into_sim()?;

    // 3. Set up output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    let end = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        log::error!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!("Simulation ended at {end} in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  {} of {} messages completed{}",
        sim.completions().len(),
        config.num_messages,
        if sim.is_last_message_completed() { "" } else { " (tick ceiling reached)" },
    );
    println!("  molecules created   : {}", sim.molecules_created());
    println!("  peak in flight      : {}", obs.peak_in_flight);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!();

    println!("{:<18} {:<12} {:<12} {:<8}", "Machine", "Tx msg", "Rx msg", "Batches");
    println!("{}", "-".repeat(52));
    for m in sim.machines() {
        let batches = m.transmitter().map_or(0, |t| t.batches_sent())
            + m.receiver().map_or(0, |r| r.batches_sent());
        println!(
            "{:<18} {:<12} {:<12} {:<8}",
            m.id.to_string(),
            m.transmitter_message_id().map_or("-".into(), |id| id.to_string()),
            m.receiver_message_id().map_or("-".into(), |id| id.to_string()),
            batches,
        );
    }

    Ok(())
}
