//! The seam between the prober and the operating system.
//!
//! The prober only ever talks to a [`Reachability`] implementation, which
//! keeps the attempt loop testable without touching the network.

use std::io;
use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;

pub mod tcp;

pub use tcp::TcpReachability;

/// Resolve a host, then ask whether an address answers within a timeout.
#[async_trait]
pub trait Reachability: Send + Sync {
    /// Translates a hostname or address literal into a single address.
    async fn resolve(&self, host: &str) -> io::Result<IpAddr>;

    /// Returns `Ok(true)` when `addr` answered within `timeout` and
    /// `Ok(false)` when it did not. `Err` means the check itself failed.
    async fn is_reachable(&self, addr: IpAddr, timeout: Duration) -> io::Result<bool>;
}
