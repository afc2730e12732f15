//! Logging macros with `format!`-style arguments.
//!
//! ```
//! use udp2es_logger::prelude::*;
//! use udp2es_logger::{info, warn};
//!
//! let logger = Logger::new();
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warn!(logger, "Retry attempt {} of {}", 3, 5);
//! ```

/// Log a message at an explicit level.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log at `Fatal`. The process keeps running.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
