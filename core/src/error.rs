use std::io;
use std::net::IpAddr;

use thiserror::Error;

use crate::result::ProbeResult;

/// Failures that end probing of a single host. The run carries on with the
/// next host.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("unknown host {host}")]
    Resolution {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while probing {addr}: {source}")]
    Io {
        addr: IpAddr,
        #[source]
        source: io::Error,
    },
}

/// The run was cancelled. Nothing further is probed.
#[derive(Debug, Error)]
#[error("probing {host} was interrupted after {} attempt(s)", .result.sent())]
pub struct Interrupted {
    pub host: String,
    /// Attempts started before the cancellation. One still in flight is
    /// counted as sent but has no outcome.
    pub result: ProbeResult,
}

impl Interrupted {
    pub fn new(host: &str, result: ProbeResult) -> Self {
        Self {
            host: host.to_string(),
            result,
        }
    }
}
