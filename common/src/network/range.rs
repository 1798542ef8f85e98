//! # Last-Octet Range Model
//!
//! A contiguous sweep over the final octet of an IPv4 address, written by the
//! user as `192.168.1.100-105`. The three-octet prefix is kept as typed; only
//! the bounds are validated.

use std::fmt;

use crate::error::TargetError;

/// Inclusive range over the last octet behind a fixed `A.B.C.` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OctetRange {
    prefix: String,
    start: u8,
    end: u8,
}

impl OctetRange {
    /// Validates `start <= end <= 255` and builds the range.
    ///
    /// `prefix` must carry its trailing dot, e.g. `"10.0.0."`.
    pub fn new(prefix: impl Into<String>, start: u16, end: u16) -> Result<Self, TargetError> {
        let invalid = TargetError::InvalidRange { start, end };
        let (Ok(start_octet), Ok(end_octet)) = (u8::try_from(start), u8::try_from(end)) else {
            return Err(invalid);
        };
        if start_octet > end_octet {
            return Err(invalid);
        }

        Ok(Self {
            prefix: prefix.into(),
            start: start_octet,
            end: end_octet,
        })
    }

    /// Number of hosts in the range. Never zero.
    pub fn len(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    /// Hosts in ascending order, formatted as `prefix + octet`.
    pub fn hosts(&self) -> impl DoubleEndedIterator<Item = String> + '_ {
        (self.start..=self.end).map(move |octet| format!("{}{octet}", self.prefix))
    }
}

impl fmt::Display for OctetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", self.prefix, self.start, self.end)
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
