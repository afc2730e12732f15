//! Output format configuration for log entries
//!
//! Provides the text forms a [`LogEntry`] can render itself as:
//! - Json: flat JSON object, the form consumed by forwarding hooks
//! - Text: human-readable single line

use super::log_entry::LogEntry;
use serde_json::{Map, Value};

/// Keys written by the JSON formatter itself.
const RESERVED_KEYS: [&str; 3] = ["time", "level", "msg"];

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format for machine processing (default)
    ///
    /// Example: `{"level":"info","msg":"Request processed","time":"2025-01-08T10:30:45.123Z","user":"alice"}`
    #[default]
    Json,

    /// Human-readable text format
    ///
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO ] Request processed user=alice`
    Text,
}

impl OutputFormat {
    /// Format a log entry according to this output format
    pub fn format(&self, entry: &LogEntry) -> String {
        match self {
            OutputFormat::Json => Self::format_json(entry),
            OutputFormat::Text => Self::format_text(entry),
        }
    }

    fn format_json(entry: &LogEntry) -> String {
        let mut object = Map::new();

        // Context fields that clash with the formatter's own keys are kept under a prefix
        if let Some(ref context) = entry.context {
            for (key, value) in context.fields() {
                let key = if RESERVED_KEYS.contains(&key.as_str()) {
                    format!("fields.{}", key)
                } else {
                    key.clone()
                };
                object.insert(key, value.to_json_value());
            }
        }

        object.insert(
            "time".to_string(),
            Value::String(entry.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()),
        );
        object.insert(
            "level".to_string(),
            Value::String(entry.level.to_str().to_string()),
        );
        object.insert("msg".to_string(), Value::String(entry.message.clone()));

        Value::Object(object).to_string()
    }

    fn format_text(entry: &LogEntry) -> String {
        let base = format!(
            "[{}] [{:5}] {}",
            entry.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            entry.level.label(),
            sanitize_message(&entry.message)
        );

        match entry.context {
            Some(ref context) if !context.is_empty() => {
                format!("{} {}", base, context.format_fields())
            }
            _ => base,
        }
    }
}

/// Escape line breaks so one entry never spans several lines.
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
