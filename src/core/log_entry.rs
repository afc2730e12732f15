//! Log entry structure

use super::log_context::LogContext;
use super::log_level::LogLevel;
use super::output_format::OutputFormat;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single log event as handed to hooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<LogContext>,
    /// Format used by [`LogEntry::render`]; set by the logger that produced the entry.
    #[serde(skip)]
    pub format: OutputFormat,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            context: None,
            format: OutputFormat::default(),
        }
    }

    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Render the entry as text using its output format.
    pub fn render(&self) -> String {
        self.format.format(self)
    }
}
