//! Event output: log file plus optional terminal echo.
//!
//! One line per event, flushed immediately so a tailing test harness sees
//! events as they happen. The log gets plain `\n` line endings; the echo
//! writer gets `\r\n` because the terminal is in raw mode while capture
//! runs.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::decoder::MouseEvent;

/// Sentinel written once tracking is enabled, before any event.
const READY_MARKER: &str = "READY";

/// Wire format for emitted event lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `press:btn=0:x=10:y=5`
    #[default]
    Text,
    /// `{"kind":"press","button":0,"x":10,"y":5}`
    Json,
}

/// Writes decoded events to a log writer and optionally echoes them.
#[derive(Debug)]
pub struct EventSink<L: Write, E: Write> {
    log: L,
    echo: Option<E>,
    format: OutputFormat,
    written: u64,
}

impl<L: Write, E: Write> EventSink<L, E> {
    pub fn new(log: L, echo: Option<E>, format: OutputFormat) -> Self {
        Self {
            log,
            echo,
            format,
            written: 0,
        }
    }

    /// Write the `READY` sentinel to the log and echo.
    ///
    /// Callers emit this once mouse tracking is live so harnesses know
    /// when it is safe to start sending input.
    pub fn ready(&mut self) -> io::Result<()> {
        self.write_line(READY_MARKER)
    }

    /// Write one event line, flushing both destinations.
    pub fn emit(&mut self, event: &MouseEvent) -> io::Result<()> {
        let line = match self.format {
            OutputFormat::Text => event.to_string(),
            OutputFormat::Json => event.to_json(),
        };
        self.write_line(&line)?;
        self.written += 1;
        Ok(())
    }

    /// Number of events emitted so far (the `READY` sentinel not included).
    pub fn events_written(&self) -> u64 {
        self.written
    }

    /// Consume the sink, returning the log and echo writers.
    pub fn into_inner(self) -> (L, Option<E>) {
        (self.log, self.echo)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.log, "{}", line)?;
        self.log.flush()?;
        if let Some(echo) = self.echo.as_mut() {
            write!(echo, "{}\r\n", line)?;
            echo.flush()?;
        }
        Ok(())
    }
}
