//! Main logger implementation
//!
//! The logger is synchronous: every call to [`Logger::log`] builds one
//! [`LogEntry`] and fires it on each registered hook that asked for the
//! entry's level, on the calling thread.

use super::{
    hook::Hook, log_context::LogContext, log_entry::LogEntry, log_level::LogLevel,
    metrics::LoggerMetrics, output_format::OutputFormat,
};
use parking_lot::RwLock;
use std::sync::Arc;

pub struct Logger {
    min_level: RwLock<LogLevel>,
    format: RwLock<OutputFormat>,
    hooks: RwLock<Vec<Arc<dyn Hook>>>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: RwLock::new(LogLevel::Info),
            format: RwLock::new(OutputFormat::Json),
            hooks: RwLock::new(Vec::new()),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Register a hook. Keep a clone of the `Arc` to reconfigure the hook later.
    pub fn add_hook(&self, hook: Arc<dyn Hook>) {
        self.hooks.write().push(hook);
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.read().len()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_format(&self, format: OutputFormat) {
        *self.format.write() = format;
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if level < self.min_level() {
            self.metrics.record_filtered();
            return;
        }

        let entry = LogEntry::new(level, message).with_format(*self.format.read());
        self.dispatch(&entry);
    }

    /// Log with structured context fields
    pub fn log_with_context(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        context: LogContext,
    ) {
        if level < self.min_level() {
            self.metrics.record_filtered();
            return;
        }

        let entry = LogEntry::new(level, message)
            .with_context(context)
            .with_format(*self.format.read());
        self.dispatch(&entry);
    }

    /// Fire an already-built entry on every interested hook.
    ///
    /// **Per-Hook Panic Isolation**: each hook call is wrapped in catch_unwind so
    /// one misbehaving hook cannot keep the others from seeing the entry.
    pub fn dispatch(&self, entry: &LogEntry) {
        let hooks = self.hooks.read();

        for (idx, hook) in hooks.iter().enumerate() {
            if !hook.levels().contains(&entry.level) {
                continue;
            }

            let fire_result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| hook.fire(entry)));

            match fire_result {
                Ok(Ok(())) => {
                    self.metrics.record_delivered();
                }
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Hook #{} ({}) failed: {}",
                        idx,
                        hook.name(),
                        e
                    );
                    self.metrics.record_failed();
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Hook #{} ({}) panicked: {}. \
                         Other hooks continue to function.",
                        idx,
                        hook.name(),
                        panic_msg
                    );
                    self.metrics.record_failed();
                }
            }
        }
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Logs at `Fatal`. Unlike some frameworks this does not exit the process.
    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    /// Logs at `Panic`. Unlike some frameworks this does not unwind.
    #[inline]
    pub fn panic(&self, message: impl Into<String>) {
        self.log(LogLevel::Panic, message);
    }

    /// Helper for structured info logging
    pub fn info_with_context(&self, message: impl Into<String>, context: LogContext) {
        self.log_with_context(LogLevel::Info, message, context);
    }

    /// Helper for structured error logging
    pub fn error_with_context(&self, message: impl Into<String>, context: LogContext) {
        self.log_with_context(LogLevel::Error, message, context);
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use udp2es_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .format(OutputFormat::Json)
    ///     .build();
    /// assert_eq!(logger.min_level(), LogLevel::Debug);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    min_level: LogLevel,
    format: OutputFormat,
    hooks: Vec<Arc<dyn Hook>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            format: OutputFormat::Json,
            hooks: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn hook(mut self, hook: Arc<dyn Hook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn build(self) -> Logger {
        let logger = Logger::new();
        logger.set_min_level(self.min_level);
        logger.set_format(self.format);
        for hook in self.hooks {
            logger.add_hook(hook);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LoggerError, Result};
    use parking_lot::Mutex;

    struct CaptureHook {
        levels: Vec<LogLevel>,
        seen: Mutex<Vec<LogEntry>>,
    }

    impl CaptureHook {
        fn new(levels: Vec<LogLevel>) -> Self {
            Self {
                levels,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl Hook for CaptureHook {
        fn levels(&self) -> Vec<LogLevel> {
            self.levels.clone()
        }

        fn fire(&self, entry: &LogEntry) -> Result<()> {
            self.seen.lock().push(entry.clone());
            Ok(())
        }

        fn name(&self) -> &str {
            "capture"
        }
    }

    struct FailingHook;

    impl Hook for FailingHook {
        fn levels(&self) -> Vec<LogLevel> {
            LogLevel::ALL.to_vec()
        }

        fn fire(&self, _entry: &LogEntry) -> Result<()> {
            Err(LoggerError::transmit(
                0,
                1,
                std::io::Error::new(std::io::ErrorKind::Other, "always fails"),
            ))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct PanickingHook;

    impl Hook for PanickingHook {
        fn levels(&self) -> Vec<LogLevel> {
            LogLevel::ALL.to_vec()
        }

        fn fire(&self, _entry: &LogEntry) -> Result<()> {
            panic!("hook exploded");
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_hook_only_sees_requested_levels() {
        let hook = Arc::new(CaptureHook::new(vec![LogLevel::Error, LogLevel::Warn]));
        let logger = Logger::builder()
            .min_level(LogLevel::Debug)
            .hook(hook.clone())
            .build();

        logger.info("not for this hook");
        logger.warn("disk at 90%");
        logger.error("disk full");
        logger.debug("also not for this hook");

        let seen = hook.seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].level, LogLevel::Warn);
        assert_eq!(seen[1].level, LogLevel::Error);
    }

    #[test]
    fn test_min_level_filters_before_hooks() {
        let hook = Arc::new(CaptureHook::new(LogLevel::ALL.to_vec()));
        let logger = Logger::new();
        assert_eq!(logger.hook_count(), 0);
        logger.add_hook(hook.clone());
        assert_eq!(logger.hook_count(), 1);

        logger.debug("below default min level");
        logger.info("delivered");

        assert_eq!(hook.seen.lock().len(), 1);
        assert_eq!(logger.metrics().filtered_count(), 1);
    }

    #[test]
    fn test_entries_carry_logger_format() {
        let hook = Arc::new(CaptureHook::new(LogLevel::ALL.to_vec()));
        let logger = Logger::builder()
            .format(OutputFormat::Text)
            .hook(hook.clone())
            .build();

        logger.info_with_context("request", LogContext::new().with_field("path", "/"));

        let seen = hook.seen.lock();
        assert_eq!(seen[0].format, OutputFormat::Text);
        assert!(seen[0].render().ends_with("request path=/"));
    }

    #[test]
    fn test_failing_and_panicking_hooks_are_isolated() {
        let capture = Arc::new(CaptureHook::new(LogLevel::ALL.to_vec()));
        let logger = Logger::new();
        logger.add_hook(Arc::new(FailingHook));
        logger.add_hook(Arc::new(PanickingHook));
        logger.add_hook(capture.clone());

        logger.error("still reaches the last hook");

        assert_eq!(capture.seen.lock().len(), 1);
        assert_eq!(logger.metrics().failed_count(), 2);
        assert_eq!(logger.metrics().delivered_count(), 1);
    }
}
