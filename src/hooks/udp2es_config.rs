//! Configuration for [`Udp2EsHook`](super::Udp2EsHook)

use super::transport::display_address;
use crate::core::{LogLevel, Result};
use serde::{Deserialize, Serialize};

/// Destination of forwarded records.
///
/// Deserializes from either snake_case keys or the `Host` / `Port` / `ESIndex`
/// spelling used by existing udp2es deployments:
///
/// ```
/// use udp2es_logger::hooks::Udp2EsConfig;
///
/// let config = Udp2EsConfig::from_json(r#"{"Host":"127.0.0.1","Port":9999,"ESIndex":"app-logs"}"#)
///     .expect("valid config");
/// assert_eq!(config.address(), "127.0.0.1:9999");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Udp2EsConfig {
    #[serde(alias = "Host")]
    pub host: String,

    #[serde(alias = "Port")]
    pub port: u16,

    /// Index name attached to every record as `index`
    #[serde(alias = "ESIndex")]
    pub es_index: String,

    /// Initial severity set; `None` means every level
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "Levels")]
    pub levels: Option<Vec<LogLevel>>,
}

impl Udp2EsConfig {
    pub fn new(host: impl Into<String>, port: u16, es_index: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            es_index: es_index.into(),
            levels: None,
        }
    }

    #[must_use]
    pub fn with_levels(mut self, levels: Vec<LogLevel>) -> Self {
        self.levels = Some(levels);
        self
    }

    /// `host:port` of the destination
    pub fn address(&self) -> String {
        display_address(&self.host, self.port)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;

    #[test]
    fn test_snake_case_keys() {
        let config = Udp2EsConfig::from_json(
            r#"{"host":"logs.internal","port":5140,"es_index":"api","levels":["error","warning"]}"#,
        )
        .unwrap();

        assert_eq!(config.host, "logs.internal");
        assert_eq!(config.port, 5140);
        assert_eq!(config.es_index, "api");
        assert_eq!(config.levels, Some(vec![LogLevel::Error, LogLevel::Warn]));
    }

    #[test]
    fn test_legacy_keys() {
        let config =
            Udp2EsConfig::from_json(r#"{"Host":"10.0.0.5","Port":9999,"ESIndex":"app-logs"}"#)
                .unwrap();

        assert_eq!(config, Udp2EsConfig::new("10.0.0.5", 9999, "app-logs"));
    }

    #[test]
    fn test_out_of_range_port_is_rejected() {
        let err =
            Udp2EsConfig::from_json(r#"{"host":"127.0.0.1","port":70000,"es_index":"x"}"#)
                .unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_levels_are_omitted_when_unset() {
        let json = serde_json::to_string(&Udp2EsConfig::new("127.0.0.1", 9999, "x")).unwrap();
        assert!(!json.contains("levels"));
    }
}
