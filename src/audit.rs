//! Audit logging for read decisions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::decision::Decision;
use crate::input::HookInput;

const MAX_SUMMARY_LEN: usize = 200;

/// An audit log entry.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Tool that was invoked, `<unknown>` if the input did not say.
    pub tool: String,
    pub blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The candidate path, or `<none>`.
    pub summary: String,
}

impl AuditEntry {
    /// Create a new audit entry from hook input and decision.
    pub fn new(input: &HookInput, decision: &Decision) -> Self {
        let (rule, reason) = match decision.block_info() {
            Some(info) => (Some(info.rule.clone()), Some(info.reason.clone())),
            None => (None, None),
        };

        let path = input.candidate_path();
        let summary = if path.is_empty() {
            "<none>".to_string()
        } else {
            truncate_string(path, MAX_SUMMARY_LEN)
        };

        Self {
            timestamp: Utc::now(),
            session_id: input.session_id().map(String::from),
            tool: input.tool_name().unwrap_or("<unknown>").to_string(),
            blocked: decision.is_blocked(),
            rule,
            reason,
            summary,
        }
    }
}

/// Truncate to at most `max_len` bytes, cutting on a char boundary.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len - 3;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

/// Audit logger for writing entries to a file.
pub struct AuditLogger {
    file: File,
}

impl AuditLogger {
    /// Open or create an audit log file.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Write an audit entry to the log.
    pub fn log(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)?;
        writeln!(self.file, "{}", json)?;
        self.file.flush()
    }

    /// Log a decision for an input.
    pub fn log_decision(&mut self, input: &HookInput, decision: &Decision) -> std::io::Result<()> {
        self.log(&AuditEntry::new(input, decision))
    }
}
