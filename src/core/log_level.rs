//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log entry, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    #[serde(alias = "warning")]
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Panic = 5,
}

impl LogLevel {
    /// Every level, most severe first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Panic,
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// Lowercase name as it appears in forwarded records.
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warning",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
            LogLevel::Panic => "panic",
        }
    }

    /// Fixed-width uppercase label for human-readable output
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Panic => "PANIC",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            "panic" => Ok(LogLevel::Panic),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_descending() {
        for pair in LogLevel::ALL.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(LogLevel::Info.to_str(), "info");
        assert_eq!(LogLevel::Warn.to_string(), "warning");
        assert_eq!(LogLevel::Panic.label(), "PANIC");
    }

    #[test]
    fn test_parse() {
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("Fatal".parse::<LogLevel>(), Ok(LogLevel::Fatal));
        assert!("trace".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LogLevel::Error).unwrap();
        assert_eq!(json, "\"error\"");

        let level: LogLevel = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(level, LogLevel::Debug);
    }
}
