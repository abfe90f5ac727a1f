//! Access logging for the schema endpoint.
//!
//! Handlers never reach for a global logger; they write through the
//! `AccessLog` handed to them at construction. The server wires in
//! `TracingLog`, tests wire in `MemoryLog` and read the lines back.

use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Target used for every access log event
pub const LOG_TARGET: &str = "datagen";

/// Sink for one-line access log records
pub trait AccessLog: Send + Sync {
    fn record(&self, line: &str);
}

/// Forwards access log lines to the `tracing` subscriber under the `datagen` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl AccessLog for TracingLog {
    fn record(&self, line: &str) {
        tracing::info!(target: LOG_TARGET, "{}", line);
    }
}

/// Keeps access log lines in memory
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl AccessLog for MemoryLog {
    fn record(&self, line: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line.to_string()),
            Err(poisoned) => poisoned.into_inner().push(line.to_string()),
        }
    }
}

/// Install the process-wide `tracing` subscriber.
///
/// Defaults to `info`; `RUST_LOG` overrides. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
