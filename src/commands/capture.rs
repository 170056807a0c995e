//! Capture command handler: the default when no subcommand is given.

use std::fs;
use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::debug;

use mousecap::capture::{self, EventSink};
use mousecap::cli::Cli;
use mousecap::config::Config;
use mousecap::terminal::MouseTracking;

/// Run a capture session on the controlling terminal.
///
/// Resolves options from config and CLI flags, enables mouse tracking,
/// and pumps stdin through the decoder until `q`, EOF, or a signal.
#[cfg(not(tarpaulin_include))]
pub fn handle(cli: &Cli) -> Result<()> {
    if !atty::is(atty::Stream::Stdin) {
        bail!("stdin is not a terminal; mouse capture needs an interactive session");
    }

    let config = Config::load()?;
    let log_path = cli
        .logfile
        .clone()
        .unwrap_or(config.capture.log_file);
    let format = cli.format.unwrap_or(config.capture.format);
    let motion = !cli.no_motion && config.capture.motion;

    let log = fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

    // A signal must not leave the terminal in raw mode with tracking on;
    // the flag lets the loop fall out so the guard below restores it.
    let stop = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&stop))
        .context("Failed to install SIGTERM handler")?;
    signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&stop))
        .context("Failed to install SIGINT handler")?;

    let echo = (!cli.quiet).then(io::stdout);
    let mut sink = EventSink::new(log, echo, format);

    let reason = {
        let _tracking =
            MouseTracking::enable(motion).context("Failed to enable mouse tracking")?;
        sink.ready().context("Failed to write READY marker")?;
        capture::run(io::stdin().lock(), &mut sink, &stop)?
    };

    debug!(?reason, "capture session finished");
    println!(
        "{} event(s) captured to {}",
        sink.events_written(),
        log_path.display()
    );
    Ok(())
}
