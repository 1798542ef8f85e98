//! Drives the prober over a whole host list.
//!
//! Hosts are probed one after another, in list order. Per-host failures are
//! folded into that host's [`HostReport`]; cancellation stops the run.

use std::net::IpAddr;

use tracing::{Instrument, debug, debug_span};

use crate::error::Interrupted;
use crate::network::Reachability;
use crate::prober::{HostReport, Prober};
use crate::result::AttemptOutcome;

/// Receives progress as the run goes, so results can be shown live.
pub trait ProbeObserver {
    fn host_started(&mut self, _host: &str) {}

    fn resolved(&mut self, _host: &str, _addr: IpAddr) {}

    fn attempt(&mut self, _addr: IpAddr, _seq: u32, _outcome: &AttemptOutcome) {}

    fn host_finished(&mut self, _report: &HostReport) {}
}

/// Observer that ignores every event.
pub struct NoopObserver;

impl ProbeObserver for NoopObserver {}

/// Probes every host in order and returns one report per host.
pub async fn run<R, O>(
    hosts: &[String],
    prober: &Prober<R>,
    observer: &mut O,
) -> Result<Vec<HostReport>, Interrupted>
where
    R: Reachability,
    O: ProbeObserver + ?Sized,
{
    let mut reports: Vec<HostReport> = Vec::with_capacity(hosts.len());

    for host in hosts {
        observer.host_started(host);

        let span = debug_span!("probe", %host);
        let report: HostReport = prober.probe(host, observer).instrument(span).await?;

        debug!(
            "finished {host}: {} of {} attempts answered",
            report.result().map_or(0, |r| r.received()),
            report.result().map_or(0, |r| r.sent()),
        );
        observer.host_finished(&report);
        reports.push(report);
    }

    Ok(reports)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
