//! Diagnostics sink shared by every step of a run.
//!
//! Messages go to the `log` facade for the console and are also kept as
//! timestamped records tagged with the host and process id. [`Diagnostics::flush`]
//! writes those records to the run log as JSON lines.

use std::cell::{Cell, RefCell};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::System;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Error,
}

/// One diagnostic emitted during the run.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub timestamp: DateTime<Utc>,
    pub host: String,
    pub pid: u32,
    pub level: Level,
    pub message: String,
}

/// Owned by the top-level caller and lent to each component by reference.
#[derive(Debug)]
pub struct Diagnostics {
    log_file: PathBuf,
    host: String,
    pid: u32,
    errors: Cell<usize>,
    records: RefCell<Vec<Record>>,
}

impl Diagnostics {
    pub fn new<P: Into<PathBuf>>(log_file: P) -> Self {
        Self {
            log_file: log_file.into(),
            host: host_name(),
            pid: std::process::id(),
            errors: Cell::new(0),
            records: RefCell::new(Vec::new()),
        }
    }

    /// Run log in the system temp directory, named after the process id.
    pub fn default_log_file() -> PathBuf {
        std::env::temp_dir().join(format!("dx-scaffold-{}.log", std::process::id()))
    }

    pub fn info<S: Into<String>>(&self, message: S) {
        let message = message.into();
        log::info!("{message}");
        self.push(Level::Info, message);
    }

    /// Records an error and bumps the error count.
    pub fn error<S: Into<String>>(&self, message: S) {
        let message = message.into();
        log::error!("{message}");
        self.errors.set(self.errors.get() + 1);
        self.push(Level::Error, message);
    }

    pub fn had_errors(&self) -> bool {
        self.errors.get() > 0
    }

    pub fn error_count(&self) -> usize {
        self.errors.get()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.borrow().clone()
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Appends the pending records to the run log and clears them.
    pub fn flush(&self) -> Result<()> {
        let records = self.records.take();
        if records.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&self.log_file)?;
        for record in &records {
            let line = serde_json::to_string(record).map_err(std::io::Error::other)?;
            writeln!(file, "{line}")?;
        }
        log::debug!("Wrote {} diagnostics to {}", records.len(), self.log_file.display());
        Ok(())
    }

    fn push(&self, level: Level, message: String) {
        self.records.borrow_mut().push(Record {
            timestamp: Utc::now(),
            host: self.host.clone(),
            pid: self.pid,
            level,
            message,
        });
    }
}

fn host_name() -> String {
    System::host_name()
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn counts_errors_only() {
        let diagnostics = Diagnostics::new("unused.log");
        diagnostics.info("copied");
        assert!(!diagnostics.had_errors());

        diagnostics.error("boom");
        diagnostics.error("again");
        assert!(diagnostics.had_errors());
        assert_eq!(diagnostics.error_count(), 2);
        assert_eq!(diagnostics.records().len(), 3);
    }

    #[test]
    fn records_are_tagged() {
        let diagnostics = Diagnostics::new("unused.log");
        diagnostics.info("hello");
        let record = &diagnostics.records()[0];
        assert_eq!(record.pid, std::process::id());
        assert!(!record.host.is_empty());
        if let Some(host) = System::host_name().filter(|h| !h.is_empty()) {
            assert_eq!(record.host, host);
        }
        assert_eq!(record.level, Level::Info);
    }

    #[test]
    fn flush_writes_json_lines() {
        let temp_dir = TempDir::new().unwrap();
        let log_file = temp_dir.path().join("run.log");
        let diagnostics = Diagnostics::new(&log_file);
        diagnostics.info("first");
        diagnostics.error("second");
        diagnostics.flush().unwrap();

        let content = std::fs::read_to_string(&log_file).unwrap();
        let lines: Vec<serde_json::Value> =
            content.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["message"], "first");
        assert_eq!(lines[1]["level"], "error");
        assert!(diagnostics.records().is_empty());
        assert!(diagnostics.had_errors());
    }

    #[test]
    fn flush_without_records_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let log_file = temp_dir.path().join("run.log");
        Diagnostics::new(&log_file).flush().unwrap();
        assert!(!log_file.exists());
    }
}
