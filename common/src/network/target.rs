//! # Probe Target Model
//!
//! Turns the raw target argument into the ordered list of hosts to probe.
//!
//! A target is either:
//! * A single host, kept verbatim (hostname, IPv4 or IPv6 literal).
//! * An IPv4 last-octet range, `192.168.1.100-105` or `192.168.1.100-192.168.1.105`.
//!
//! Anything that does not match the range grammar in full is a single host.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::TargetError;
use crate::network::range::OctetRange;

static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.)([0-9]{1,3})-([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.)?([0-9]{1,3})$",
    )
    .expect("range pattern is a valid regex")
});

/// What the user asked us to probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A hostname or address literal, resolved later by the prober.
    Host { name: String },
    /// A sweep over the last octet of an IPv4 prefix.
    Range { range: OctetRange },
}

impl Target {
    /// The ordered host list for this target.
    pub fn hosts(&self) -> Vec<String> {
        match self {
            Target::Host { name } => vec![name.clone()],
            Target::Range { range } => range.hosts().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Target::Host { .. } => 1,
            Target::Range { range } => range.len(),
        }
    }
}

impl FromStr for Target {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_range(s)? {
            Some(range) => Ok(Target::Range { range }),
            None => Ok(Target::Host {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Host { name } => f.write_str(name),
            Target::Range { range } => range.fmt(f),
        }
    }
}

/// Expands a raw target string into the hosts to probe, in order.
///
/// Fails only when the string is a range expression with bad bounds; the
/// caller must then abort without probing anything.
pub fn expand(target: &str) -> Result<Vec<String>, TargetError> {
    Ok(Target::from_str(target)?.hosts())
}

/// Matches the whole string against the range grammar.
///
/// Returns `Ok(None)` when `s` is not a range expression at all.
fn parse_range(s: &str) -> Result<Option<OctetRange>, TargetError> {
    let Some(caps) = RANGE_PATTERN.captures(s) else {
        return Ok(None);
    };

    let prefix: &str = &caps[1];
    if let Some(end_prefix) = caps.get(3)
        && end_prefix.as_str() != prefix
    {
        return Err(TargetError::PrefixMismatch {
            start_prefix: prefix.to_string(),
            end_prefix: end_prefix.as_str().to_string(),
        });
    }

    let start: u16 = parse_bound(&caps[2]);
    let end: u16 = parse_bound(&caps[4]);

    OctetRange::new(prefix, start, end).map(Some)
}

// The pattern guarantees 1-3 ASCII digits.
fn parse_bound(digits: &str) -> u16 {
    digits
        .bytes()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
