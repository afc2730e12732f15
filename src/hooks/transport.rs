//! Datagram transport used by forwarding hooks.
//!
//! [`Transport`] is the only thing a hook needs from the network: hand over one
//! contiguous payload, learn how many bytes went out. [`UdpTransport`] is the
//! production implementation; tests substitute their own.

use crate::core::{LoggerError, Result};
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

/// Destination used when the configured host is empty.
const LOCAL_HOST: &str = "127.0.0.1";

/// Operations every transport must support.
pub trait Transport: Send + Sync {
    /// Send `payload` as a single datagram, returning the number of bytes written.
    fn send(&self, payload: &[u8]) -> io::Result<usize>;
}

/// Sends datagrams over a UDP socket connected to one peer.
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
    peer: SocketAddr,
}

impl UdpTransport {
    /// Resolve `host:port` and connect a UDP socket to the first address found.
    ///
    /// An empty `host` means the local system, as in `":9999"`.
    ///
    /// Connecting a UDP socket performs no handshake; it only fixes the peer,
    /// so this succeeds whether or not anything listens at the destination.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let address = display_address(host, port);
        let host = if host.is_empty() { LOCAL_HOST } else { host };

        if port == 0 {
            return Err(LoggerError::channel_setup(
                address,
                io::Error::new(io::ErrorKind::InvalidInput, "port must be in 1-65535"),
            ));
        }

        let peer = (host, port)
            .to_socket_addrs()
            .map_err(|e| LoggerError::channel_setup(&address, e))?
            .next()
            .ok_or_else(|| {
                LoggerError::channel_setup(
                    &address,
                    io::Error::new(io::ErrorKind::NotFound, "host resolved to no addresses"),
                )
            })?;

        // Bind to any local port of the peer's address family...
        let local = match peer.ip() {
            IpAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
            IpAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
        };
        let socket = UdpSocket::bind(local).map_err(|e| LoggerError::channel_setup(&address, e))?;
        // ...and fix the destination
        socket
            .connect(peer)
            .map_err(|e| LoggerError::channel_setup(&address, e))?;

        Ok(Self { socket, peer })
    }

    /// The resolved destination.
    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }
}

impl Transport for UdpTransport {
    fn send(&self, payload: &[u8]) -> io::Result<usize> {
        self.socket.send(payload)
    }
}

/// `host:port`, bracketing IPv6 literals.
pub(crate) fn display_address(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}
