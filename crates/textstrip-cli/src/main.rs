// this_file: src/main.rs

//! textstrip CLI: render one line of text into a tightly cropped image

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Render(args) if args.verbose => "debug",
        Commands::Render(args) if args.quiet => "error",
        _ => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Render(args) => commands::render::run(&args),
        Commands::Info(args) => commands::info::run(&args),
    }
}
