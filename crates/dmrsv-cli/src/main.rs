mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so listings on stdout stay clean
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dmrsv_cli=warn,dmrsv_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::resolve_config(&args);

    match args.command {
        Command::List { format, output } => {
            commands::list::run(&config, format, output.as_deref())
        }
        Command::Compare { first, second } => {
            commands::compare::run(config.game_language, &first, &second)
        }
        Command::Locate { query, limit } => commands::locate::run(&config, &query, limit),
        Command::Missing { kind } => commands::missing::run(&config, kind),
        Command::Categories => commands::categories::run(&config),
    }
}
