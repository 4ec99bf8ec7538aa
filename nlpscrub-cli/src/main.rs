//! nlpscrub command-line entry point

use clap::{ArgAction, Parser};
use nlpscrub_cli::commands::Commands;

/// Clean, parse and analyze tweets and other short social text
#[derive(Debug, Parser)]
#[command(name = "nlpscrub", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress logging and progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    nlpscrub_cli::init_logging(cli.verbose, cli.quiet);

    cli.command
        .execute(cli.quiet)
        .inspect_err(|e| log::error!("{e:#}"))
}
