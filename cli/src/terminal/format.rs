use std::net::IpAddr;
use std::time::Duration;

use colored::*;
use pingr_core::{AttemptOutcome, ProbeResult, RttSummary};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn addr_colored(addr: &IpAddr) -> ColoredString {
    match addr {
        IpAddr::V4(v4) => v4.to_string().color(colors::IPV4_ADDR),
        IpAddr::V6(v6) => v6.to_string().color(colors::IPV6_ADDR),
    }
}

pub fn ttl_to_str(ttl: Option<u8>) -> String {
    ttl.map_or_else(|| "unavailable".to_string(), |ttl| ttl.to_string())
}

pub fn attempt_line(addr: &IpAddr, outcome: &AttemptOutcome) -> String {
    match outcome {
        AttemptOutcome::Reply { rtt_ms, ttl } => format!(
            "{} {}: time={} TTL={}",
            "Reply from".color(colors::REPLY),
            addr_colored(addr),
            format!("{rtt_ms}ms").color(colors::RTT),
            ttl_to_str(*ttl)
        ),
        AttemptOutcome::Timeout => format!(
            "{} {} {}",
            "Request to".color(colors::TIMEOUT),
            addr_colored(addr),
            "timed out".color(colors::TIMEOUT)
        ),
    }
}

pub fn packets_detail(result: &ProbeResult) -> Detail {
    let value: String = format!(
        "sent = {}, received = {}, lost = {} ({}% loss)",
        result.sent(),
        result.received(),
        result.lost(),
        result.loss_percent()
    );
    let value: ColoredString = match result.loss_percent() {
        0 => value.green(),
        100 => value.red(),
        _ => value.yellow(),
    };
    ("Packets".to_string(), value)
}

pub fn rtt_detail(summary: &RttSummary) -> Detail {
    let value: String = format!(
        "min = {}ms, max = {}ms, avg = {}ms",
        summary.min_ms,
        summary.max_ms,
        summary.avg_rounded()
    );
    ("RTT".to_string(), value.color(colors::RTT))
}

/// The statistics block. RTT figures are left out when nothing came back.
pub fn statistics_details(result: &ProbeResult) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![packets_detail(result)];
    if let Some(summary) = result.summary() {
        details.push(rtt_detail(&summary));
    }
    details
}

pub fn completion_line(responded: usize, total: usize, elapsed: Duration) -> String {
    let unit: &str = if total == 1 { "host" } else { "hosts" };
    let hosts: ColoredString = format!("{responded}/{total} {unit}").bold().green();
    let elapsed: ColoredString = format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow();
    format!("Ping complete: {hosts} responded in {elapsed}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
