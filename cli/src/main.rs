mod cli;
mod commands;
mod feature;
mod shape;

use cli::{Cli, Commands};
use commands::{info, relate};
use tracing::Level;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Info(args) => info::run(&cli, args),
        Commands::Contains(args) => relate::contains(&cli, args),
        Commands::Intersects(args) => relate::intersects(&cli, args),
        Commands::Within(args) => relate::within(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
