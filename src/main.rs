use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    pretty_env_logger::formatted_builder().filter_level(level).init();

    match &cli.command {
        Commands::Score(args) => commands::score::run(&cli, args),
        Commands::Render(args) => commands::render::run(&cli, args),
    }
}
