use std::ffi::OsString;

use clap::Parser;

/// Number of requests fired when no usable count is given.
pub const DEFAULT_REQUESTS: u64 = 100;

/// Arguments are taken raw: no built-in flags and no UTF-8 check, so every
/// unusable first argument (`-h`, `--version`, invalid UTF-8) still means 100.
#[derive(Debug, Parser)]
#[command(
    name = "loadburst",
    about = "Fire a burst of concurrent GET requests at http://localhost:4444",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    #[arg(allow_hyphen_values = true, allow_negative_numbers = true)]
    pub count: Option<OsString>,

    #[arg(hide = true, allow_hyphen_values = true, trailing_var_arg = true, num_args = 0..)]
    pub rest: Vec<OsString>,
}

impl Args {
    pub fn requests(&self) -> u64 {
        resolve_request_count(self.count.as_deref().and_then(|s| s.to_str()))
    }
}

/// Digits only, otherwise the default. Overflowing digit strings also fall back.
pub fn resolve_request_count(arg: Option<&str>) -> u64 {
    match arg {
        Some(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse().unwrap_or(DEFAULT_REQUESTS)
        }
        _ => DEFAULT_REQUESTS,
    }
}
