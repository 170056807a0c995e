//! The capture read loop.
//!
//! Pulls raw bytes from the terminal, feeds them through the SGR decoder,
//! and hands completed events to the sink. The loop itself owns no
//! terminal state; enabling tracking and restoring the terminal is the
//! caller's job (see [`crate::terminal::MouseTracking`]).

mod sink;

pub use sink::{EventSink, OutputFormat};

use std::io::{self, ErrorKind, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::decoder::SgrDecoder;

/// Read size per chunk.
const READ_SIZE: usize = 4096;

/// Errors that can occur during a capture session.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Failed to read terminal input: {0}")]
    Read(#[source] io::Error),

    #[error("Failed to write event: {0}")]
    Write(#[source] io::Error),
}

/// Why a capture session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The quit key `q` arrived outside an escape sequence.
    QuitKey,
    /// The input reached end of file.
    Eof,
    /// The external stop flag was set (e.g. by a signal handler).
    Signal,
}

/// Run the capture loop until quit, EOF, or the stop flag.
///
/// Reads chunks from `input`, decodes them, and emits every completed
/// event to `sink`. A chunk containing `q` but no escape byte quits
/// before the chunk is fed; a `q` that shares a chunk with escape
/// sequence bytes is ordinary input. Interrupted reads are retried.
pub fn run<R: Read, L: Write, E: Write>(
    mut input: R,
    sink: &mut EventSink<L, E>,
    stop: &AtomicBool,
) -> Result<StopReason, CaptureError> {
    let mut decoder = SgrDecoder::new();
    let mut chunk = [0u8; READ_SIZE];

    loop {
        if stop.load(Ordering::Relaxed) {
            debug!("stop flag set, ending capture");
            return Ok(StopReason::Signal);
        }

        let n = match input.read(&mut chunk) {
            Ok(0) => return Ok(StopReason::Eof),
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(CaptureError::Read(err)),
        };
        let data = &chunk[..n];

        if is_quit_chunk(data) {
            debug!("quit key received");
            return Ok(StopReason::QuitKey);
        }

        for event in decoder.feed(data) {
            sink.emit(&event).map_err(CaptureError::Write)?;
        }
    }
}

/// Quit convention: a `q` counts only when the chunk carries no escape
/// byte, so a literal `q` inside sequence data never ends the session.
fn is_quit_chunk(data: &[u8]) -> bool {
    data.contains(&b'q') && !data.contains(&0x1b)
}
