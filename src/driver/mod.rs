pub mod report;
pub mod types;
mod unit;

use std::io::Write;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::config::TARGET_URL;
use crate::error::Result;
use report::{spawn_printer, Event};
use types::now_secs;

pub use types::{FailureKind, Outcome, RunSummary, UnitRecord};

/// What one invocation fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub requests: u64,
    pub target: String,
}

impl RunPlan {
    pub fn new(requests: u64) -> Self {
        Self {
            requests,
            target: TARGET_URL.to_string(),
        }
    }

    /// Aim somewhere other than the fixed endpoint; used by tests.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }
}

/// Pooled client shared by every unit. No timeout: stragglers are waited for.
/// Redirects are not followed, so a unit sends exactly one GET and reports the 3xx itself.
pub fn build_client() -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("loadburst/", env!("CARGO_PKG_VERSION"))),
    );
    let client = reqwest::Client::builder()
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()?;
    Ok(client)
}

/// Launches every unit at once, waits for all of them, then prints the summary.
///
/// Request failures only show up in the affected unit's `Result` field. An
/// error from here means the report itself could not be written.
pub async fn run<W>(plan: &RunPlan, client: reqwest::Client, out: W) -> Result<RunSummary>
where
    W: Write + Send + 'static,
{
    let (events, printer) = spawn_printer(out);
    let target: Arc<str> = Arc::from(plan.target.as_str());

    let _ = events.send(Event::Launching {
        requests: plan.requests,
    });
    info!(requests = plan.requests, url = %target, "launching burst");

    let started_at = now_secs();
    let mut units = JoinSet::new();
    for index in 0..plan.requests {
        units.spawn(unit::fire(
            index,
            client.clone(),
            Arc::clone(&target),
            events.clone(),
        ));
    }

    let mut completed = 0u64;
    let mut slowest_unit_secs = 0i64;
    while let Some(joined) = units.join_next().await {
        match joined {
            Ok(record) => {
                completed += 1;
                slowest_unit_secs = slowest_unit_secs.max(record.elapsed_secs());
            }
            Err(e) => error!(error = %e, "request task failed"),
        }
    }

    let summary = RunSummary {
        requests: plan.requests,
        started_at,
        finished_at: now_secs(),
        completed,
        slowest_unit_secs,
    };
    info!(
        requests = summary.requests,
        completed = summary.completed,
        elapsed_secs = summary.elapsed_secs(),
        "burst finished"
    );

    let _ = events.send(Event::Summary(summary.clone()));
    drop(events);
    printer.await??;

    Ok(summary)
}
