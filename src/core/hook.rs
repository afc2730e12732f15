//! Hook trait for components that receive log entries from a [`Logger`](super::Logger)

use super::{error::Result, log_entry::LogEntry, log_level::LogLevel};

pub trait Hook: Send + Sync {
    /// Levels this hook wants to receive. The logger consults this before calling `fire`.
    fn levels(&self) -> Vec<LogLevel>;

    fn fire(&self, entry: &LogEntry) -> Result<()>;

    fn name(&self) -> &str;
}
