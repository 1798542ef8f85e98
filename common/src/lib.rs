//! Shared models for pingr: target parsing, probe configuration and the
//! logging macros used by every crate in the workspace.

pub mod config;
pub mod error;
pub mod log;
pub mod network;

#[doc(hidden)]
pub use tracing;
