use thiserror::Error;

/// Failures of the driver itself. Individual request failures never show up here.
#[derive(Debug, Error)]
pub enum BurstError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),

    #[error("report printer stopped: {0}")]
    Printer(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, BurstError>;
