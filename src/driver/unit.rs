use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use super::report::Event;
use super::types::{now_secs, FailureKind, Outcome, UnitRecord};

/// One unit of work: a single GET, timed, with its start and finish reported.
pub(crate) async fn fire(
    index: u64,
    client: reqwest::Client,
    target: Arc<str>,
    events: UnboundedSender<Event>,
) -> UnitRecord {
    let started_at = now_secs();
    // A closed channel means the printer died; run() reports that when it awaits the printer.
    let _ = events.send(Event::Started { index });
    debug!(index, "request started");

    let outcome = match client.get(&*target).send().await {
        Ok(resp) => {
            let status = resp.status();
            if let Err(e) = resp.bytes().await {
                debug!(index, error = %e, "response body cut short");
            }
            Outcome::Status(status.as_u16())
        }
        Err(e) => {
            let kind = FailureKind::classify(&e);
            warn!(index, reason = %kind, error = %e, "request failed");
            Outcome::Transport(kind)
        }
    };

    let record = UnitRecord {
        index,
        started_at,
        finished_at: now_secs(),
        outcome,
    };
    debug!(index, elapsed_secs = record.elapsed_secs(), result = %record.outcome, "request finished");
    let _ = events.send(Event::Finished(record.clone()));
    record
}
