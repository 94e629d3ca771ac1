//! Burst load helper.
//!
//! Fires a fixed number of concurrent HTTP GET requests at a local server,
//! prints one line when each request starts and one when it finishes, and
//! closes with the total wall-clock time of the run.

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod target;
pub mod telemetry;

pub use driver::{run, RunPlan};
pub use error::BurstError;
