use thiserror::Error;

/// Errors raised while turning user input into a list of hosts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("invalid IP range {start}-{end}: bounds must satisfy 0 <= start <= end <= 255")]
    InvalidRange { start: u16, end: u16 },

    #[error("invalid IP range: '{start_prefix}' and '{end_prefix}' must share the same first three octets")]
    PrefixMismatch {
        start_prefix: String,
        end_prefix: String,
    },
}

/// Errors raised when building a [`crate::config::ProbeConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("attempt count must be a positive integer")]
    ZeroCount,

    #[error("timeout must be a positive number of milliseconds")]
    ZeroTimeout,
}
