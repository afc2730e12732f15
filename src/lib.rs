//! # udp2es_logger
//!
//! A small synchronous logger plus a hook that forwards every entry it is
//! given to an Elasticsearch UDP ingester.
//!
//! ## Features
//!
//! - **Hooks**: register any number of [`Hook`]s; each one picks the levels it wants
//! - **UDP forwarding**: [`Udp2EsHook`] stamps records with `time`, `level` and
//!   `index` and sends one JSON datagram per entry
//! - **Structured fields**: attach key/value context to entries
//!
//! ```no_run
//! use std::sync::Arc;
//! use udp2es_logger::prelude::*;
//!
//! let hook = Udp2EsHook::new(Udp2EsConfig::new("127.0.0.1", 9999, "app-logs"))?;
//!
//! let logger = Logger::new();
//! logger.add_hook(Arc::new(hook));
//! logger.info("boot complete");
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod hooks;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        FieldValue, Hook, LogContext, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, OutputFormat, Result,
    };
    pub use crate::hooks::{Transport, UdpTransport, Udp2EsConfig, Udp2EsHook};
}

pub use crate::core::{
    FieldValue, Hook, LogContext, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, OutputFormat, Result,
};
pub use crate::hooks::{Transport, UdpTransport, Udp2EsConfig, Udp2EsHook};
