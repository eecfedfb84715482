//! Append-only audit log writer
//!
//! Each entry is one JSON line, flushed as soon as it is written so a
//! crash right after a mutation still leaves the entry on disk.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{ShoeboxError, ShoeboxResult};

use super::entry::AuditEntry;

/// Writes and reads the JSONL audit log
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Logger for the given file; nothing is created until the first write
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry and flush
    pub fn log(&self, entry: &AuditEntry) -> ShoeboxResult<()> {
        let mut file = self.open_for_append()?;

        let json = serde_json::to_string(entry)?;
        writeln!(file, "{}", json).map_err(|e| ShoeboxError::io(&self.log_path, e))?;
        file.flush().map_err(|e| ShoeboxError::io(&self.log_path, e))?;

        Ok(())
    }

    /// Append several entries, flushing once at the end
    pub fn log_batch(&self, entries: &[AuditEntry]) -> ShoeboxResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut file = self.open_for_append()?;

        for entry in entries {
            let json = serde_json::to_string(entry)?;
            writeln!(file, "{}", json).map_err(|e| ShoeboxError::io(&self.log_path, e))?;
        }
        file.flush().map_err(|e| ShoeboxError::io(&self.log_path, e))?;

        Ok(())
    }

    /// All entries, oldest first; a log that was never written is empty
    pub fn read_all(&self) -> ShoeboxResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file =
            File::open(&self.log_path).map_err(|e| ShoeboxError::io(&self.log_path, e))?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| ShoeboxError::io(&self.log_path, e))?;
            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                ShoeboxError::malformed(
                    &self.log_path,
                    format!("unparseable entry at line {}: {}", line_num + 1, e),
                )
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The most recent `count` entries, oldest of those first
    pub fn read_recent(&self, count: usize) -> ShoeboxResult<Vec<AuditEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Number of entries in the log
    pub fn entry_count(&self) -> ShoeboxResult<usize> {
        if !self.log_path.exists() {
            return Ok(0);
        }

        let file =
            File::open(&self.log_path).map_err(|e| ShoeboxError::io(&self.log_path, e))?;
        let reader = BufReader::new(file);
        let count = reader
            .lines()
            .map_while(Result::ok)
            .filter(|line| !line.trim().is_empty())
            .count();

        Ok(count)
    }

    /// Whether the log file exists yet
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Path of the log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }

    fn open_for_append(&self) -> ShoeboxResult<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ShoeboxError::io(&self.log_path, e))
    }
}
