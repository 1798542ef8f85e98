pub mod ping;

use clap::{ArgAction, Parser};
use pingr_common::config::{DEFAULT_COUNT, DEFAULT_PORT, DEFAULT_TIMEOUT_MS};
use pingr_common::network::target::Target;

const EXAMPLES: &str = "\
Examples:
  pingr example.com 4 2000
  pingr 192.168.1.1 5
  pingr 192.168.1.100-105 3 1500
  pingr 192.168.1.100-192.168.1.105 3";

#[derive(Parser, Debug)]
#[command(name = "pingr", version)]
#[command(about = "Measure host reachability and round-trip latency.")]
#[command(after_help = EXAMPLES, allow_negative_numbers = true)]
pub struct CommandLine {
    /// Hostname, IP address, or IPv4 range such as 192.168.1.100-105
    pub target: Target,

    /// Number of attempts per host
    #[arg(default_value_t = DEFAULT_COUNT, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Timeout of a single attempt, in milliseconds
    #[arg(default_value_t = DEFAULT_TIMEOUT_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: u64,

    /// TCP port used by the reachability check
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Print less; repeat to print only statistics and problems
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
