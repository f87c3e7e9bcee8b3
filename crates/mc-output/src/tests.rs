//! Tests for mc-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{CompletionRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("completions.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("completions.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(dir.path().join("completions.csv")), ["msg_id", "tick", "machine"]);
        assert_eq!(
            headers(dir.path().join("tick_summaries.csv")),
            ["tick", "emitted", "delivered", "in_flight"]
        );
    }

    #[test]
    fn completion_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_completion(&CompletionRow { msg_id: 1, tick: 3, machine: 0 }).unwrap();
        w.write_completion(&CompletionRow { msg_id: 2, tick: 7, machine: 0 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("completions.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "3");
        assert_eq!(&rows[1][1], "7");
    }

    #[test]
    fn tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow { tick: 4, emitted: 10, delivered: 2, in_flight: 30 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["4", "10", "2", "30"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use mc_core::{KineticClass, Position, RunConfig, StepConfig};
    use mc_protocol::MoleculeParams;
    use mc_sim::{RoleSpec, Sim, SimBuilder};

    use crate::row::{CompletionRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult, SimOutputObserver};

    /// Two machines one unit apart; two messages complete at ticks 3 and 7.
    fn exchange() -> Sim {
        let config = RunConfig {
            num_messages:        2,
            num_retransmissions: 2,
            retransmit_wait:     10,
            step:                StepConfig::still(),
            ..RunConfig::default()
        };
        let rx_at = Position::new(1.0, 0.0, 0.0);
        let params = vec![MoleculeParams::new(1, 0.5, KineticClass::Passive)];
        let mut b = SimBuilder::new(config);
        b.add_transmitter(Position::ORIGIN, 1.0, RoleSpec::new(Position::ORIGIN, params.clone()));
        b.add_receiver(rx_at, 1.0, RoleSpec::new(rx_at, params));
        b.build().unwrap()
    }

    /// Keeps rows in memory; optionally fails every summary write.
    #[derive(Default)]
    struct MemWriter {
        completions:  Vec<CompletionRow>,
        summaries:    Vec<TickSummaryRow>,
        finished:     usize,
        fail_summary: bool,
    }

    impl OutputWriter for MemWriter {
        fn write_completion(&mut self, row: &CompletionRow) -> OutputResult<()> {
            self.completions.push(*row);
            Ok(())
        }

        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            if self.fail_summary {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.summaries.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn rows_follow_the_run() {
        let mut sim = exchange();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(
            w.completions,
            vec![
                CompletionRow { msg_id: 1, tick: 3, machine: 0 },
                CompletionRow { msg_id: 2, tick: 7, machine: 0 },
            ]
        );
        assert_eq!(w.summaries.len(), 8);
        assert_eq!(w.summaries[0], TickSummaryRow { tick: 0, emitted: 1, delivered: 0, in_flight: 1 });
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn completions_only_skips_summaries() {
        let mut sim = exchange();
        let mut obs = SimOutputObserver::new(MemWriter::default()).completions_only();
        sim.run(&mut obs);
        let w = obs.into_writer();
        assert!(w.summaries.is_empty());
        assert_eq!(w.completions.len(), 2);
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = exchange();
        let writer = MemWriter { fail_summary: true, ..MemWriter::default() };
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = exchange();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("completions.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "2");

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 8);
    }
}
