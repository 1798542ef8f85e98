//! Per-host accumulation of attempt outcomes and the statistics derived from
//! them.

/// What a single attempt produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The host answered. `rtt_ms` is the wall time of the check, floored.
    /// `ttl` stays `None` unless the check can see the IP header.
    Reply { rtt_ms: u64, ttl: Option<u8> },
    /// No answer within the timeout.
    Timeout,
}

/// Running totals for one host.
///
/// `received <= sent` holds by construction: every attempt bumps `sent` when
/// it starts, only completed replies bump `received`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProbeResult {
    sent: u32,
    received: u32,
    outcomes: Vec<AttemptOutcome>,
    min_rtt: Option<u64>,
    max_rtt: Option<u64>,
    total_rtt: u64,
}

/// Latency figures, only available when at least one reply arrived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RttSummary {
    pub min_ms: u64,
    pub max_ms: u64,
    pub avg_ms: f64,
}

impl RttSummary {
    pub fn avg_rounded(&self) -> u64 {
        self.avg_ms.round() as u64
    }
}

impl ProbeResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a new attempt as sent, before its outcome is known.
    ///
    /// An attempt that never completes (failed check, cancellation) stays
    /// counted as sent and lost.
    pub fn start_attempt(&mut self) {
        self.sent += 1;
    }

    /// Fills in the outcome of the attempt last started.
    pub fn complete(&mut self, outcome: AttemptOutcome) {
        debug_assert!(self.outcomes.len() < self.sent as usize);
        if let AttemptOutcome::Reply { rtt_ms, .. } = outcome {
            self.received += 1;
            self.total_rtt += rtt_ms;
            self.min_rtt = Some(self.min_rtt.map_or(rtt_ms, |min| min.min(rtt_ms)));
            self.max_rtt = Some(self.max_rtt.map_or(rtt_ms, |max| max.max(rtt_ms)));
        }
        self.outcomes.push(outcome);
    }

    /// Starts and completes an attempt in one step.
    pub fn record(&mut self, outcome: AttemptOutcome) {
        self.start_attempt();
        self.complete(outcome);
    }

    pub fn sent(&self) -> u32 {
        self.sent
    }

    pub fn received(&self) -> u32 {
        self.received
    }

    pub fn lost(&self) -> u32 {
        self.sent - self.received
    }

    pub fn outcomes(&self) -> &[AttemptOutcome] {
        &self.outcomes
    }

    /// Loss as a whole percentage, rounded half away from zero.
    pub fn loss_percent(&self) -> u32 {
        if self.sent == 0 {
            return 0;
        }
        (f64::from(self.lost()) / f64::from(self.sent) * 100.0).round() as u32
    }

    pub fn min_rtt(&self) -> Option<u64> {
        self.min_rtt
    }

    pub fn max_rtt(&self) -> Option<u64> {
        self.max_rtt
    }

    pub fn total_rtt(&self) -> u64 {
        self.total_rtt
    }

    pub fn avg_rtt(&self) -> Option<f64> {
        (self.received > 0).then(|| self.total_rtt as f64 / f64::from(self.received))
    }

    /// `None` when nothing was received.
    pub fn summary(&self) -> Option<RttSummary> {
        Some(RttSummary {
            min_ms: self.min_rtt?,
            max_ms: self.max_rtt?,
            avg_ms: self.avg_rtt()?,
        })
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
