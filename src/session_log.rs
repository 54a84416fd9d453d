//! Optional JSONL session log.
//!
//! When `CUBE_CROSS_LOG_PATH` is set, every command appends one JSON object
//! followed by `\n`. The file is opened in append mode and created if needed.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::CubeSnapshot;

/// One line of the session log
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord<'a> {
    /// Milliseconds since the Unix epoch
    pub ts: u64,
    pub command: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    pub moves: String,
    pub well_formed: bool,
    pub cross_solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<&'a CubeSnapshot>,
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub struct SessionLog {
    file: File,
    buf: Vec<u8>,
}

impl SessionLog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open session log {}", path.display()))?;
        Ok(Self {
            file,
            buf: Vec::with_capacity(1024),
        })
    }

    /// Serialize `record` and append it as a single line
    pub fn write(&mut self, record: &SessionRecord<'_>) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, record)?;
        self.buf.push(b'\n');
        self.file.write_all(&self.buf)?;
        self.file.flush()?;
        Ok(())
    }
}
