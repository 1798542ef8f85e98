//! Thin wrappers over `tracing` so every crate logs through the same targets.
//!
//! The CLI formatter keys its status symbols off these targets.

/// Target used for plain terminal output that must be printed verbatim.
pub const PRINT_TARGET: &str = "pingr::print";

/// Target used for positive status lines.
pub const SUCCESS_TARGET: &str = "pingr::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}
