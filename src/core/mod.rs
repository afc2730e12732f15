//! Core logger types and traits

pub mod error;
pub mod hook;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;

pub use error::{LoggerError, Result};
pub use hook::Hook;
pub use log_context::{FieldValue, LogContext};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_format::OutputFormat;
