//! JSONL audit logging for git-safety-guard
//!
//! Records one line per hook invocation when enabled in the config. Writing
//! is best effort and never changes the decision.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::hook::{Evaluation, HookResponse};
use crate::output::Decision;

/// Log level for audit entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Allowed,
    Blocked,
    Skipped,
    Error,
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the decision
    pub timestamp: DateTime<Utc>,

    /// Log level (ALLOWED, BLOCKED, SKIPPED, ERROR)
    pub level: LogLevel,

    /// Tool that was invoked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,

    /// Rule ID that matched (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    /// Summary of the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_summary: Option<String>,

    /// Reason for the decision
    pub reason: String,

    /// Session ID (if provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry from a handled request
    pub fn new(response: &HookResponse) -> Self {
        let mut entry = Self {
            timestamp: Utc::now(),
            level: LogLevel::Skipped,
            tool: None,
            rule_id: None,
            input_summary: None,
            reason: String::new(),
            session_id: None,
        };

        let input = match &response.evaluation {
            Err(e) => {
                entry.level = LogLevel::Error;
                entry.reason = e.to_string();
                return entry;
            }
            Ok(Evaluation::Empty) => {
                entry.reason = "empty input".to_string();
                return entry;
            }
            Ok(Evaluation::OtherTool(input)) => {
                entry.reason = "not a shell command".to_string();
                input
            }
            Ok(Evaluation::EmptyCommand(input)) => {
                entry.reason = "empty command".to_string();
                input
            }
            Ok(Evaluation::Classified {
                input, decision, ..
            }) => {
                match decision {
                    Decision::Allow { reason } => {
                        entry.level = LogLevel::Allowed;
                        entry.reason = reason.clone();
                    }
                    Decision::Deny { rule_id, reason } => {
                        entry.level = LogLevel::Blocked;
                        entry.rule_id = Some(rule_id.clone());
                        entry.reason = reason.clone();
                    }
                }
                input
            }
        };

        entry.tool = input.tool_name.clone();
        entry.input_summary = Some(input.summary());
        entry.session_id = input.session_id.clone();
        entry
    }
}

/// Audit logger
#[derive(Default)]
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger; `None` or an unopenable path disables it
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            // Ensure parent directory exists
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log a handled request
    pub fn log_response(&mut self, response: &HookResponse) -> Result<(), std::io::Error> {
        let entry = AuditEntry::new(response);
        self.log(&entry)
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}
