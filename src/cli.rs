//! Command line interface definition.
//!
//! Lives in the library so xtask can render the man page from the same
//! clap definitions the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::capture::OutputFormat;

/// Capture and decode SGR terminal mouse events.
///
/// Enables mouse tracking on the current terminal, decodes the SGR escape
/// sequences it reports, and writes one line per event to stdout and a
/// log file. Press `q` to quit.
#[derive(Debug, Parser)]
#[command(
    name = "mousecap",
    version = Box::leak(crate::version().into_boxed_str()) as &str,
    about = "Capture and decode SGR terminal mouse events",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Log file for event lines (defaults to the configured path)
    pub logfile: Option<PathBuf>,

    /// Output format for event lines
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Do not track motion (drag) events
    #[arg(long)]
    pub no_motion: bool,

    /// Do not echo events to stdout
    #[arg(long, short)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
