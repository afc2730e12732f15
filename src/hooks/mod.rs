//! Hook implementations

pub mod transport;
pub mod udp2es;
pub mod udp2es_config;

pub use transport::{Transport, UdpTransport};
pub use udp2es::Udp2EsHook;
pub use udp2es_config::Udp2EsConfig;

pub use crate::core::Hook;
