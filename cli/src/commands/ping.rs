use std::net::IpAddr;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use pingr_common::config::{Config, ProbeConfig};
use pingr_common::{error, info, success, warn};
use pingr_core::network::TcpReachability;
use pingr_core::{AttemptOutcome, HostReport, ProbeObserver, Prober, ProbeResult, session};
use tokio_util::sync::CancellationToken;

use crate::commands::CommandLine;
use crate::mprint;
use crate::terminal::{format, print};

/// Conventional exit status for a run stopped by SIGINT.
const INTERRUPTED_EXIT: u8 = 130;

pub async fn ping(cmd: CommandLine, cfg: &Config) -> anyhow::Result<ExitCode> {
    let probe_cfg: ProbeConfig = ProbeConfig::new(cmd.count, cmd.timeout_ms)?;
    let hosts: Vec<String> = cmd.target.hosts();

    let cancel: CancellationToken = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        ctrl_c.cancel();
    });

    let reachability = TcpReachability::new(cmd.port);
    let port: u16 = reachability.port();
    let prober = Prober::new(reachability, probe_cfg, cancel);

    print::header("pinging", cfg.quiet);
    info!(
        "Pinging {} ({} {}) on TCP port {port}, {} attempts each, timeout {} ms",
        cmd.target,
        hosts.len(),
        if hosts.len() == 1 { "host" } else { "hosts" },
        prober.config().count(),
        prober.config().timeout().as_millis()
    );

    let mut observer = TerminalObserver::new(cfg);
    let start_time: Instant = Instant::now();

    match session::run(&hosts, &prober, &mut observer).await {
        Ok(reports) => {
            let responded: usize = reports.iter().filter(|r| r.responded()).count();
            ping_ends(responded, reports.len(), start_time.elapsed(), cfg);
            Ok(ExitCode::SUCCESS)
        }
        Err(interrupted) => {
            mprint!();
            warn!("Ping interrupted: {interrupted}");
            Ok(ExitCode::from(INTERRUPTED_EXIT))
        }
    }
}

fn ping_ends(responded: usize, total: usize, elapsed: Duration, cfg: &Config) {
    let output: String = format::completion_line(responded, total, elapsed);
    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}

/// Renders probe progress as it happens.
struct TerminalObserver {
    quiet: u8,
}

impl TerminalObserver {
    fn new(cfg: &Config) -> Self {
        Self { quiet: cfg.quiet }
    }

    fn print_statistics(&self, addr: &IpAddr, result: &ProbeResult) {
        if self.quiet == 0 {
            mprint!();
        }
        print::tree_head(&addr.to_string());
        print::as_tree_one_level(format::statistics_details(result));
    }
}

impl ProbeObserver for TerminalObserver {
    fn host_started(&mut self, host: &str) {
        if self.quiet == 0 {
            mprint!();
        }
        print::header(host, self.quiet);
    }

    fn resolved(&mut self, host: &str, addr: IpAddr) {
        if self.quiet > 0 {
            return;
        }
        if host == addr.to_string() {
            print::print_status(format!("Probing {}", format::addr_colored(&addr)));
        } else {
            print::print_status(format!("Resolved {host} to {}", format::addr_colored(&addr)));
        }
    }

    fn attempt(&mut self, addr: IpAddr, _seq: u32, outcome: &AttemptOutcome) {
        if self.quiet > 0 {
            return;
        }
        print::print_status(format::attempt_line(&addr, outcome));
    }

    fn host_finished(&mut self, report: &HostReport) {
        match report {
            HostReport::Unresolved { host, error } => {
                error!("Unknown host {host}. Check the hostname or IP address.");
                tracing::debug!("{error:?}");
            }
            HostReport::Completed { addr, result, .. } => {
                self.print_statistics(addr, result);
            }
            HostReport::Aborted {
                addr,
                result,
                error,
                ..
            } => {
                error!("{error}");
                warn!("Check the network connection and the privileges pingr runs with.");
                self.print_statistics(addr, result);
            }
        }
    }
}
