//! The per-host attempt loop.
//!
//! A host moves through `Resolving`, then `Probing`, and ends in one of three
//! terminal states, each mapped to a [`HostReport`] variant. Cancellation is
//! not a host state: it unwinds the whole run as [`Interrupted`].

use std::net::IpAddr;

use pingr_common::config::ProbeConfig;
use tokio::time::{Instant, sleep};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::error::{Interrupted, ProbeError};
use crate::network::Reachability;
use crate::result::{AttemptOutcome, ProbeResult};
use crate::session::ProbeObserver;

/// How probing of one host ended.
#[derive(Debug)]
pub enum HostReport {
    /// The host could not be resolved; no attempt was made.
    Unresolved { host: String, error: ProbeError },
    /// Every configured attempt ran.
    Completed {
        host: String,
        addr: IpAddr,
        result: ProbeResult,
    },
    /// The check failed with an I/O error; `result` holds what ran before it.
    Aborted {
        host: String,
        addr: IpAddr,
        result: ProbeResult,
        error: ProbeError,
    },
}

impl HostReport {
    pub fn host(&self) -> &str {
        match self {
            HostReport::Unresolved { host, .. }
            | HostReport::Completed { host, .. }
            | HostReport::Aborted { host, .. } => host,
        }
    }

    pub fn addr(&self) -> Option<IpAddr> {
        match self {
            HostReport::Unresolved { .. } => None,
            HostReport::Completed { addr, .. } | HostReport::Aborted { addr, .. } => Some(*addr),
        }
    }

    pub fn result(&self) -> Option<&ProbeResult> {
        match self {
            HostReport::Unresolved { .. } => None,
            HostReport::Completed { result, .. } | HostReport::Aborted { result, .. } => {
                Some(result)
            }
        }
    }

    /// True when at least one attempt got a reply.
    pub fn responded(&self) -> bool {
        self.result().is_some_and(|result| result.received() > 0)
    }
}

/// Runs the paced attempt loop against one host at a time.
pub struct Prober<R> {
    reachability: R,
    config: ProbeConfig,
    cancel: CancellationToken,
}

impl<R: Reachability> Prober<R> {
    pub fn new(reachability: R, config: ProbeConfig, cancel: CancellationToken) -> Self {
        Self {
            reachability,
            config,
            cancel,
        }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Resolves `host` and runs `count` attempts against it.
    ///
    /// Resolution and I/O failures end up in the returned report. Only
    /// cancellation is returned as an error.
    pub async fn probe<O>(&self, host: &str, observer: &mut O) -> Result<HostReport, Interrupted>
    where
        O: ProbeObserver + ?Sized,
    {
        let resolved = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(Interrupted::new(host, ProbeResult::new())),
            resolved = self.reachability.resolve(host) => resolved,
        };

        let addr: IpAddr = match resolved {
            Ok(addr) => addr,
            Err(source) => {
                debug!("failed to resolve {host}: {source}");
                return Ok(HostReport::Unresolved {
                    host: host.to_string(),
                    error: ProbeError::Resolution {
                        host: host.to_string(),
                        source,
                    },
                });
            }
        };
        observer.resolved(host, addr);

        let mut result = ProbeResult::new();
        for seq in 1..=self.config.count() {
            result.start_attempt();
            let started: Instant = Instant::now();
            let check = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return Err(Interrupted::new(host, result)),
                check = self.reachability.is_reachable(addr, self.config.timeout()) => check,
            };
            let rtt_ms: u64 = started.elapsed().as_millis() as u64;

            let outcome: AttemptOutcome = match check {
                Ok(true) => AttemptOutcome::Reply { rtt_ms, ttl: None },
                Ok(false) => AttemptOutcome::Timeout,
                Err(source) => {
                    debug!("attempt {seq} against {addr} failed: {source}");
                    return Ok(HostReport::Aborted {
                        host: host.to_string(),
                        addr,
                        result,
                        error: ProbeError::Io { addr, source },
                    });
                }
            };

            trace!("attempt {seq} against {addr}: {outcome:?}");
            result.complete(outcome);
            observer.attempt(addr, seq, &outcome);

            if !self.pace().await {
                return Err(Interrupted::new(host, result));
            }
        }

        Ok(HostReport::Completed {
            host: host.to_string(),
            addr,
            result,
        })
    }

    /// Waits out the pacing interval. Returns `false` if cancelled meanwhile.
    async fn pace(&self) -> bool {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => false,
            _ = sleep(self.config.interval()) => true,
        }
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
