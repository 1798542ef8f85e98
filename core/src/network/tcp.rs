//! Reachability over a plain TCP handshake.
//!
//! Needs no privileges. A host that completes the handshake or actively
//! refuses it is alive; silence until the timeout is a lost attempt. No
//! socket is kept between attempts.

use std::io::{self, ErrorKind};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use pingr_common::config::DEFAULT_PORT;
use tokio::net::{TcpStream, lookup_host};
use tokio::time::timeout;
use tracing::trace;

use super::Reachability;

#[derive(Clone, Copy, Debug)]
pub struct TcpReachability {
    port: u16,
}

impl TcpReachability {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Default for TcpReachability {
    fn default() -> Self {
        Self::new(DEFAULT_PORT)
    }
}

#[async_trait]
impl Reachability for TcpReachability {
    async fn resolve(&self, host: &str) -> io::Result<IpAddr> {
        if let Ok(addr) = host.parse::<IpAddr>() {
            return Ok(addr);
        }

        let mut addrs = lookup_host((host, self.port)).await?;
        addrs.next().map(|socket_addr| socket_addr.ip()).ok_or_else(|| {
            io::Error::new(ErrorKind::NotFound, format!("no address found for {host}"))
        })
    }

    async fn is_reachable(&self, addr: IpAddr, probe_timeout: Duration) -> io::Result<bool> {
        let socket_addr: SocketAddr = SocketAddr::new(addr, self.port);

        match timeout(probe_timeout, TcpStream::connect(socket_addr)).await {
            Ok(Ok(_stream)) => Ok(true),
            Ok(Err(e)) => classify_connect_error(e),
            Err(_elapsed) => Ok(false),
        }
    }
}

fn classify_connect_error(err: io::Error) -> io::Result<bool> {
    trace!("connect failed: {err}");
    match err.kind() {
        ErrorKind::ConnectionRefused | ErrorKind::ConnectionReset => Ok(true),
        ErrorKind::TimedOut | ErrorKind::HostUnreachable | ErrorKind::NetworkUnreachable => {
            Ok(false)
        }
        _ => Err(err),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
