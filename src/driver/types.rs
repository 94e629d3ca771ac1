use std::fmt;

/// Wall-clock unix time, truncated to whole seconds.
pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Why a request produced no status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Connect,
    Timeout,
    Request,
    Other,
}

impl FailureKind {
    pub fn classify(error: &reqwest::Error) -> Self {
        if error.is_connect() {
            FailureKind::Connect
        } else if error.is_timeout() {
            FailureKind::Timeout
        } else if error.is_request() {
            FailureKind::Request
        } else {
            FailureKind::Other
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            FailureKind::Connect => "connection refused or host unreachable",
            FailureKind::Timeout => "timeout",
            FailureKind::Request => "request could not be sent",
            FailureKind::Other => "unknown network error",
        };
        f.write_str(reason)
    }
}

/// What one request came back with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Status(u16),
    Transport(FailureKind),
}

impl Outcome {
    pub fn status(&self) -> Option<u16> {
        match self {
            Outcome::Status(code) => Some(*code),
            Outcome::Transport(_) => None,
        }
    }
}

/// Renders the `Result` field: the numeric status, or nothing at all on transport failure.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Status(code) => write!(f, "{code}"),
            Outcome::Transport(_) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRecord {
    pub index: u64,
    pub started_at: i64,
    pub finished_at: i64,
    pub outcome: Outcome,
}

impl UnitRecord {
    pub fn elapsed_secs(&self) -> i64 {
        self.finished_at - self.started_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub requests: u64,
    pub started_at: i64,
    pub finished_at: i64,
    /// Units that ran to completion; a panicked unit is not counted
    pub completed: u64,
    pub slowest_unit_secs: i64,
}

impl RunSummary {
    pub fn elapsed_secs(&self) -> i64 {
        self.finished_at - self.started_at
    }
}
