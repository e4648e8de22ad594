mod commands;
mod terminal;

use commands::{CommandLine, Commands, batch, interactive};
use ipvet_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    // Missing or unrecognized modes fall back to the usage text; the process
    // always exits successfully.
    let Some(commands) = CommandLine::parse_args() else {
        print::usage();
        return Ok(());
    };

    logging::init(commands.quiet);

    let cfg = Config {
        quiet: commands.quiet,
    };

    match commands.command {
        Commands::Interactive => interactive::run(),
        Commands::BatchIps => batch::run_ips(&cfg),
        Commands::BatchSubnetMasks => batch::run_subnet_masks(&cfg),
    }
}
