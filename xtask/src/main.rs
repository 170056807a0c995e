//! Developer tasks for the mousecap workspace.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace maintenance tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate the mousecap(1) man page from the CLI definition
    Mangen {
        /// Directory to write the man page into
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Mangen { out_dir } => mangen(&out_dir),
    }
}

fn mangen(out_dir: &PathBuf) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = mousecap::cli::Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut rendered = Vec::new();
    man.render(&mut rendered).context("Failed to render man page")?;

    let path = out_dir.join("mousecap.1");
    fs::write(&path, rendered).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote {}", path.display());
    Ok(())
}
