//! mousecap binary entry point.

mod commands;

use anyhow::Result;
use clap::Parser;

use mousecap::cli::{Cli, Command};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Config { ref action }) => commands::config::handle(action),
        Some(Command::Completions { shell }) => commands::completions::handle(shell),
        None => commands::capture::handle(&cli),
    }
}
