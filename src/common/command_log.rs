use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::common::package::CompletedProcess;
use crate::common::paths;

#[derive(Debug, Serialize, Deserialize)]
pub struct CommandLogEntry {
    pub timestamp: DateTime<Utc>,
    pub program: String,
    pub args: Vec<String>,
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Appends one JSON line per child process
#[derive(Debug, Clone)]
pub struct CommandLogger {
    log_file: PathBuf,
}

impl CommandLogger {
    pub fn new() -> Result<Self> {
        Ok(Self::at(paths::data_dir()?.join("commands.jsonl")))
    }

    pub fn at(log_file: impl Into<PathBuf>) -> Self {
        Self {
            log_file: log_file.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.log_file
    }

    pub fn log(&self, done: &CompletedProcess) -> Result<()> {
        let entry = CommandLogEntry {
            timestamp: Utc::now(),
            program: done.invocation.program.clone(),
            args: done.invocation.args.clone(),
            exit_code: done.status,
            success: done.success(),
            stdout: done.stdout.clone(),
            stderr: done.stderr.clone(),
        };

        if let Some(parent) = self.log_file.parent() {
            create_dir_all(parent).context("Failed to create command log directory")?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .context("Failed to open command log file")?;

        let json_line =
            serde_json::to_string(&entry).context("Failed to serialize command log entry")?;

        writeln!(file, "{json_line}").context("Failed to write to command log file")?;

        Ok(())
    }
}
