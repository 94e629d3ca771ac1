//! Console report.
//!
//! Units never touch the writer directly. They send [`Event`]s down a channel
//! and a single printer task writes each one as whole lines, so output from
//! concurrent units interleaves by line and never inside one.

use std::fmt;
use std::io::Write;

use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;

use super::types::{RunSummary, UnitRecord};

pub const SEPARATOR: &str = "--------------------";

#[derive(Debug, Clone)]
pub enum Event {
    Launching { requests: u64 },
    Started { index: u64 },
    Finished(UnitRecord),
    Summary(RunSummary),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Launching { requests } => write!(f, "Launching {requests} requests"),
            Event::Started { index } => write!(f, "Request {index}..."),
            Event::Finished(record) => write!(
                f,
                "Finished {}; Time {}s; Result {}",
                record.index,
                record.elapsed_secs(),
                record.outcome
            ),
            Event::Summary(summary) => write!(
                f,
                "{SEPARATOR}\nRequests {}\nTotal run time {}s",
                summary.requests,
                summary.elapsed_secs()
            ),
        }
    }
}

/// Spawns the printer. It exits once every sender is dropped.
pub fn spawn_printer<W>(mut out: W) -> (UnboundedSender<Event>, JoinHandle<std::io::Result<()>>)
where
    W: Write + Send + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let handle = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            writeln!(out, "{event}")?;
            out.flush()?;
        }
        Ok(())
    });
    (tx, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::types::{FailureKind, Outcome};
    use std::sync::{Arc, Mutex};

    fn finished(index: u64, secs: i64, outcome: Outcome) -> Event {
        Event::Finished(UnitRecord {
            index,
            started_at: 100,
            finished_at: 100 + secs,
            outcome,
        })
    }

    #[test]
    fn test_line_formats() {
        assert_eq!(
            Event::Launching { requests: 3 }.to_string(),
            "Launching 3 requests"
        );
        assert_eq!(Event::Started { index: 2 }.to_string(), "Request 2...");
        assert_eq!(
            finished(1, 0, Outcome::Status(200)).to_string(),
            "Finished 1; Time 0s; Result 200"
        );
        assert_eq!(
            finished(7, 4, Outcome::Status(500)).to_string(),
            "Finished 7; Time 4s; Result 500"
        );
    }

    #[test]
    fn test_transport_failure_leaves_result_empty() {
        assert_eq!(
            finished(0, 0, Outcome::Transport(FailureKind::Connect)).to_string(),
            "Finished 0; Time 0s; Result "
        );
    }

    #[test]
    fn test_summary_block() {
        let summary = RunSummary {
            requests: 5,
            started_at: 10,
            finished_at: 12,
            completed: 5,
            slowest_unit_secs: 2,
        };
        assert_eq!(
            Event::Summary(summary).to_string(),
            "--------------------\nRequests 5\nTotal run time 2s"
        );
    }

    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_printer_writes_whole_lines_in_arrival_order() {
        let sink = Sink::default();
        let (tx, handle) = spawn_printer(sink.clone());
        tx.send(Event::Launching { requests: 1 }).unwrap();
        tx.send(Event::Started { index: 0 }).unwrap();
        tx.send(finished(0, 0, Outcome::Status(204))).unwrap();
        drop(tx);
        handle.await.unwrap().unwrap();

        let text = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            text,
            "Launching 1 requests\nRequest 0...\nFinished 0; Time 0s; Result 204\n"
        );
    }
}
