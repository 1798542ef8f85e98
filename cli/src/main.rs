mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, ping};
use pingr_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        no_color: commands.no_color,
    };

    print::initialize(&cfg);
    logging::init_logging(&cfg);

    ping::ping(commands, &cfg).await
}
