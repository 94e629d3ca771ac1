#![allow(dead_code)]
use std::collections::BTreeSet;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Cloneable in-memory stdout stand-in.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A parsed `Finished {i}; Time {t}s; Result {code}` line.
#[derive(Debug)]
pub struct Finished {
    pub index: u64,
    pub secs: i64,
    pub result: String,
}

pub fn started_indices(lines: &[String]) -> BTreeSet<u64> {
    lines
        .iter()
        .filter_map(|l| l.strip_prefix("Request ")?.strip_suffix("...")?.parse().ok())
        .collect()
}

pub fn finished(lines: &[String]) -> Vec<Finished> {
    lines
        .iter()
        .filter_map(|l| {
            let rest = l.strip_prefix("Finished ")?;
            let (index, rest) = rest.split_once("; Time ")?;
            let (secs, result) = rest.split_once("s; Result ")?;
            Some(Finished {
                index: index.parse().ok()?,
                secs: secs.parse().ok()?,
                result: result.to_string(),
            })
        })
        .collect()
}

/// The last three lines, which must be the summary block.
pub fn summary_block(lines: &[String]) -> (&str, &str, &str) {
    let n = lines.len();
    assert!(n >= 3, "output too short: {lines:?}");
    (lines[n - 3].as_str(), lines[n - 2].as_str(), lines[n - 1].as_str())
}

pub fn total_run_secs(line: &str) -> i64 {
    line.strip_prefix("Total run time ")
        .and_then(|s| s.strip_suffix('s'))
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| panic!("not a total line: {line}"))
}

/// A local address nothing listens on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
