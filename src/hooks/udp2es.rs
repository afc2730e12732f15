//! Hook that forwards entries to an Elasticsearch UDP ingester
//!
//! Each fired entry is rendered by the host logger, decoded back into a JSON
//! object, stamped with `time`, `level` and `index`, and sent as one datagram.
//! Nothing is buffered or retried: a failed send is reported and the entry is gone.

use super::transport::{Transport, UdpTransport};
use super::udp2es_config::Udp2EsConfig;
use crate::core::{Hook, LogEntry, LogLevel, LoggerError, Result};
use chrono::Utc;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::fmt;
use std::io;

/// Hook that sends every entry it receives to `host:port` over UDP
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use udp2es_logger::prelude::*;
///
/// let hook = Arc::new(
///     Udp2EsHook::new(Udp2EsConfig::new("127.0.0.1", 9999, "app-logs"))
///         .expect("Failed to resolve udp2es endpoint"),
/// );
/// hook.set_levels(vec![LogLevel::Error, LogLevel::Warn]);
///
/// let logger = Logger::new();
/// logger.add_hook(hook);
/// logger.error("This record is sent to 127.0.0.1:9999");
/// ```
pub struct Udp2EsHook {
    config: Udp2EsConfig,
    levels: RwLock<Option<Vec<LogLevel>>>,
    transport: Box<dyn Transport>,
}

impl Udp2EsHook {
    /// Create a hook with a UDP socket connected to `config.host:config.port`.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::ChannelSetup`] if the destination cannot be resolved
    /// or the socket cannot be opened.
    pub fn new(config: Udp2EsConfig) -> Result<Self> {
        let transport = UdpTransport::connect(&config.host, config.port)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a hook that writes through `transport` instead of a UDP socket.
    pub fn with_transport(config: Udp2EsConfig, transport: impl Transport + 'static) -> Self {
        let levels = RwLock::new(config.levels.clone());
        Self {
            config,
            levels,
            transport: Box::new(transport),
        }
    }

    /// Replace the severity set. Order is kept; duplicates are not removed.
    pub fn set_levels(&self, levels: Vec<LogLevel>) {
        *self.levels.write() = Some(levels);
    }

    pub fn config(&self) -> &Udp2EsConfig {
        &self.config
    }

    pub fn es_index(&self) -> &str {
        &self.config.es_index
    }

    /// Stamp `record` with the forwarding fields, replacing any existing values.
    pub fn enrich(&self, record: &mut Map<String, Value>, level: LogLevel) {
        record.insert("time".to_string(), Value::from(now_nanos()));
        record.insert("level".to_string(), Value::from(level.to_str()));
        record.insert("index".to_string(), Value::from(self.config.es_index.as_str()));
    }
}

impl fmt::Debug for Udp2EsHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Udp2EsHook")
            .field("config", &self.config)
            .field("levels", &*self.levels.read())
            .finish_non_exhaustive()
    }
}

impl Hook for Udp2EsHook {
    fn levels(&self) -> Vec<LogLevel> {
        match *self.levels.read() {
            Some(ref levels) => levels.clone(),
            None => LogLevel::ALL.to_vec(),
        }
    }

    fn fire(&self, entry: &LogEntry) -> Result<()> {
        let raw = entry.render();

        let mut record: Map<String, Value> = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                eprintln!("[UDP2ES ERROR] Unable to unmarshal log string: {}", raw);
                return Err(LoggerError::decode(raw, e));
            }
        };

        self.enrich(&mut record, entry.level);

        let payload = match serde_json::to_vec(&record) {
            Ok(payload) => payload,
            Err(e) => {
                eprintln!(
                    "[UDP2ES ERROR] Unable to marshal json log detail: {:?}",
                    record
                );
                return Err(LoggerError::encode(e));
            }
        };

        match self.transport.send(&payload) {
            Ok(written) if written == payload.len() => Ok(()),
            Ok(written) => {
                eprintln!(
                    "[UDP2ES ERROR] Unable to send log line to udp2es. \
                     Wrote {} of {} bytes",
                    written,
                    payload.len()
                );
                Err(LoggerError::transmit(
                    written,
                    payload.len(),
                    io::Error::new(io::ErrorKind::WriteZero, "datagram partially written"),
                ))
            }
            Err(e) => {
                eprintln!(
                    "[UDP2ES ERROR] Unable to send log line to udp2es. \
                     Wrote 0 bytes before error: {}",
                    e
                );
                Err(LoggerError::transmit(0, payload.len(), e))
            }
        }
    }

    fn name(&self) -> &str {
        "udp2es"
    }
}

/// Wall clock as nanoseconds since the Unix epoch.
fn now_nanos() -> i64 {
    // Out of range only past the year 2262
    Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
}
