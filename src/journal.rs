use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;
use crate::files::FileReport;

/// One line of the run journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub timestamp: String,
    pub action: String,
    pub input: String,
    pub output: String,
    pub chars: u64,
    pub input_bytes: u64,
    pub output_bytes: u64,
}

impl JournalEntry {
    pub fn new(action: &str, input: &Path, output: &Path, report: &FileReport) -> Self {
        JournalEntry {
            timestamp: Utc::now().to_rfc3339(),
            action: action.to_string(),
            input: input.display().to_string(),
            output: output.display().to_string(),
            chars: report.chars,
            input_bytes: report.input_bytes,
            output_bytes: report.output_bytes,
        }
    }
}

/// Append `entry` as a single JSON line, creating the journal if needed.
pub fn append(path: &Path, entry: &JournalEntry) -> Result<()> {
    let json = serde_json::to_string(entry).map_err(io::Error::other)?;

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", json)?;
    Ok(())
}

/// All entries in the order they were written. Blank lines are skipped.
pub fn read_all(path: &Path) -> Result<Vec<JournalEntry>> {
    let content = fs::read_to_string(path)?;
    let mut entries = Vec::new();
    for line in content.lines().filter(|line| !line.trim().is_empty()) {
        let entry = serde_json::from_str(line)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        entries.push(entry);
    }
    Ok(entries)
}
