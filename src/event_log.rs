//! Session event log - line-delimited JSON.
//!
//! One record per line, each with `type`, `seq` and `ts` (unix millis):
//!
//! ```text
//! {"seq":0,"ts":1700000000000,"type":"session_start","seed":42,"width":10,"height":20,"tick_ms":500}
//! {"seq":1,"ts":1700000000001,"type":"spawn","kind":"t"}
//! {"seq":2,"ts":1700000004501,"type":"lock","lines":0}
//! {"seq":9,"ts":1700000090000,"type":"game_over","pieces":31,"lines":2}
//! ```
//!
//! The game never stalls on the log: the first failed write disables the log
//! and keeps the error so the shell can report it after leaving raw mode.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::ShapeKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEvent {
    SessionStart {
        #[serde(skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
        width: usize,
        height: usize,
        tick_ms: u32,
    },
    Spawn {
        kind: &'static str,
    },
    Lock {
        lines: usize,
    },
    GameOver {
        pieces: u32,
        lines: u32,
    },
}

impl LogEvent {
    pub fn spawn(kind: ShapeKind) -> Self {
        LogEvent::Spawn {
            kind: kind.as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
struct LogRecord<'a> {
    seq: u64,
    ts: u64,
    #[serde(flatten)]
    event: &'a LogEvent,
}

pub struct EventLog {
    file: Option<File>,
    buf: Vec<u8>,
    seq: u64,
    error: Option<std::io::Error>,
}

impl EventLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open event log {}", path.display()))?;
        Ok(Self {
            file: Some(file),
            buf: Vec::with_capacity(256),
            seq: 0,
            error: None,
        })
    }

    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self {
            file: None,
            buf: Vec::new(),
            seq: 0,
            error: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Number of records written so far.
    pub fn records_written(&self) -> u64 {
        self.seq
    }

    pub fn record(&mut self, event: &LogEvent) {
        let Some(file) = self.file.as_mut() else {
            return;
        };

        self.buf.clear();
        let rec = LogRecord {
            seq: self.seq,
            ts: unix_millis(),
            event,
        };
        if serde_json::to_writer(&mut self.buf, &rec).is_err() {
            return;
        }
        self.buf.push(b'\n');

        match file.write_all(&self.buf) {
            Ok(()) => self.seq += 1,
            Err(e) => {
                self.file = None;
                self.error = Some(e);
            }
        }
    }

    /// The write error that disabled the log, if any. Returned once.
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
