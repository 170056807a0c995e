//! Integration tests for the capture loop with scripted input chunks.

use std::collections::VecDeque;
use std::io::{self, Read};
use std::sync::atomic::AtomicBool;

use mousecap::capture::{self, EventSink, OutputFormat, StopReason};

/// Reader that returns one scripted chunk per `read` call.
struct ScriptedReader {
    chunks: VecDeque<Vec<u8>>,
}

impl ScriptedReader {
    fn new<const N: usize>(chunks: [&[u8]; N]) -> Self {
        Self {
            chunks: chunks.iter().map(|c| c.to_vec()).collect(),
        }
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.chunks.pop_front() {
            Some(chunk) => {
                buf[..chunk.len()].copy_from_slice(&chunk);
                Ok(chunk.len())
            }
            None => Ok(0),
        }
    }
}

fn run_chunks<const N: usize>(
    chunks: [&[u8]; N],
) -> (StopReason, Vec<String>, Vec<String>, u64) {
    let mut sink = EventSink::new(Vec::new(), Some(Vec::new()), OutputFormat::Text);
    sink.ready().unwrap();

    let stop = AtomicBool::new(false);
    let reason = capture::run(ScriptedReader::new(chunks), &mut sink, &stop).unwrap();

    let written = sink.events_written();
    let (log, echo) = sink.into_inner();
    let log_lines = String::from_utf8(log)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    let echo_lines = String::from_utf8(echo.unwrap())
        .unwrap()
        .split("\r\n")
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    (reason, log_lines, echo_lines, written)
}

#[test]
fn sequence_split_across_reads_emits_once_then_quits() {
    let (reason, log, echo, written) =
        run_chunks([b"\x1b[<0;10", b";5M", b"q"]);

    assert_eq!(reason, StopReason::QuitKey);
    assert_eq!(written, 1);
    assert_eq!(log, vec!["READY", "press:btn=0:x=10:y=5"]);
    assert_eq!(echo, vec!["READY", "press:btn=0:x=10:y=5"]);
}

#[test]
fn echo_lines_use_carriage_returns() {
    let mut sink = EventSink::new(Vec::new(), Some(Vec::new()), OutputFormat::Text);
    let stop = AtomicBool::new(false);
    capture::run(
        ScriptedReader::new([&b"\x1b[<0;1;1M"[..]]),
        &mut sink,
        &stop,
    )
    .unwrap();

    let (_, echo) = sink.into_inner();
    assert_eq!(echo.unwrap(), b"press:btn=0:x=1:y=1\r\n");
}

#[test]
fn exhausted_input_reports_eof() {
    let (reason, log, _, written) = run_chunks([b"\x1b[<64;1;1M"]);

    assert_eq!(reason, StopReason::Eof);
    assert_eq!(written, 1);
    assert_eq!(log, vec!["READY", "scroll_up:btn=64:x=1:y=1"]);
}

#[test]
fn quit_key_in_its_own_chunk_wins_over_buffered_partial() {
    // The trailing partial sequence never completes; quit still works.
    let (reason, log, _, written) = run_chunks([b"\x1b[<0;10", b"q"]);

    assert_eq!(reason, StopReason::QuitKey);
    assert_eq!(written, 0);
    assert_eq!(log, vec!["READY"]);
}

#[test]
fn json_capture_writes_parseable_lines() {
    let mut sink = EventSink::new(Vec::new(), None::<Vec<u8>>, OutputFormat::Json);
    let stop = AtomicBool::new(false);
    capture::run(
        ScriptedReader::new([&b"\x1b[<32;12;5M"[..]]),
        &mut sink,
        &stop,
    )
    .unwrap();

    let (log, _) = sink.into_inner();
    let line = String::from_utf8(log).unwrap();
    let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(value["kind"], "drag");
    assert_eq!(value["button"], 0);
    assert_eq!(value["x"], 12);
    assert_eq!(value["y"], 5);
}
