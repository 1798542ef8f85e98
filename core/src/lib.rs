//! The probing engine: resolves each host, runs the paced attempt loop and
//! accumulates per-host statistics.

pub mod error;
pub mod network;
pub mod prober;
pub mod result;
pub mod session;

pub use error::{Interrupted, ProbeError};
pub use network::Reachability;
pub use prober::{HostReport, Prober};
pub use result::{AttemptOutcome, ProbeResult, RttSummary};
pub use session::{NoopObserver, ProbeObserver};
