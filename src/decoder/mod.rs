//! Streaming decoder for SGR mouse escape sequences.
//!
//! Terminals in SGR extended mouse mode report button activity as
//! `ESC [ < Pb ; Px ; Py M` (press/drag/scroll) or `... m` (release).
//! The decoder consumes raw terminal input in arbitrarily sized chunks
//! and yields one [`MouseEvent`] per completed sequence, buffering any
//! incomplete trailing bytes until the next feed.
//!
//! Decoding is best-effort: bytes outside a sequence are dropped, a
//! sequence interrupted by a new escape is abandoned, and a body that
//! does not carry exactly three integer fields is discarded. Nothing is
//! ever surfaced as an error.

mod event;

pub use event::{MouseEvent, MouseEventKind};

use tracing::trace;

/// Fixed 3-byte prefix of every SGR mouse sequence: `ESC [ <`.
const INTRODUCER: [u8; 3] = [0x1b, b'[', b'<'];

/// Escape byte; a fresh one inside a sequence body aborts the sequence.
const ESC: u8 = 0x1b;

/// Motion flag added to the button code while a button is held.
const MOTION_FLAG: u16 = 32;

/// Wheel-up button code; wheel-down is everything above it.
const SCROLL_UP: u16 = 64;

/// Where the scanner currently is in the byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Looking for the start of the next sequence.
    Introducer,
    /// Introducer found at the front of the buffer; looking for `M`/`m`.
    Terminator,
}

/// What a terminator scan found.
enum Scan {
    /// Terminator at this index; the sequence is complete.
    Complete(usize),
    /// A new escape at this index before any terminator.
    Abandoned(usize),
}

/// Incremental decoder for SGR mouse sequences.
///
/// Feed it raw terminal bytes as they arrive; it hands back completed
/// events and keeps partial sequences buffered across calls:
///
/// ```
/// use mousecap::decoder::SgrDecoder;
///
/// let mut decoder = SgrDecoder::new();
/// assert_eq!(decoder.feed(b"\x1b[<0;10").count(), 0);
/// let events: Vec<_> = decoder.feed(b";5M").collect();
/// assert_eq!(events[0].to_string(), "press:btn=0:x=10:y=5");
/// ```
#[derive(Debug, Default)]
pub struct SgrDecoder {
    buf: Vec<u8>,
    state: ScanState,
}

impl Default for ScanState {
    fn default() -> Self {
        ScanState::Introducer
    }
}

impl SgrDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append input bytes and iterate over the events they complete.
    ///
    /// The returned iterator is lazy; each `next()` advances the scanner.
    /// Dropping it early loses nothing: unconsumed bytes stay buffered
    /// and the remaining events surface on the next call.
    pub fn feed(&mut self, bytes: &[u8]) -> Events<'_> {
        self.buf.extend_from_slice(bytes);
        Events { decoder: self }
    }

    /// Bytes received but not yet consumed by a completed sequence.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    fn next_event(&mut self) -> Option<MouseEvent> {
        loop {
            match self.state {
                ScanState::Introducer => {
                    let Some(start) = find_introducer(&self.buf) else {
                        self.trim_noise();
                        return None;
                    };
                    if start > 0 {
                        // Stray input before the sequence is dropped, not reported.
                        trace!(discarded = start, "dropping bytes preceding mouse sequence");
                        self.buf.drain(..start);
                    }
                    self.state = ScanState::Terminator;
                }
                ScanState::Terminator => match self.scan_terminator() {
                    None => return None,
                    Some(Scan::Abandoned(at)) => {
                        trace!("unterminated mouse sequence, resyncing on new escape");
                        self.buf.drain(..at);
                        self.state = ScanState::Introducer;
                    }
                    Some(Scan::Complete(end)) => {
                        let event = parse_sequence(&self.buf[INTRODUCER.len()..end], self.buf[end]);
                        self.buf.drain(..=end);
                        self.state = ScanState::Introducer;
                        match event {
                            Some(event) => return Some(event),
                            None => trace!("discarding mouse sequence with malformed body"),
                        }
                    }
                },
            }
        }
    }

    /// Scan past the introducer for a terminator or an aborting escape.
    fn scan_terminator(&self) -> Option<Scan> {
        for (i, &byte) in self.buf.iter().enumerate().skip(INTRODUCER.len()) {
            if byte == b'M' || byte == b'm' {
                return Some(Scan::Complete(i));
            }
            if byte == ESC {
                return Some(Scan::Abandoned(i));
            }
        }
        None
    }

    /// Cap buffer growth under pure noise.
    ///
    /// Keeps only a trailing proper prefix of the introducer (at most two
    /// bytes); everything before it can never become part of a sequence.
    fn trim_noise(&mut self) {
        let max = self.buf.len().min(INTRODUCER.len() - 1);
        let keep = (1..=max)
            .rev()
            .find(|&len| self.buf.ends_with(&INTRODUCER[..len]))
            .unwrap_or(0);
        let cut = self.buf.len() - keep;
        if cut > 0 {
            trace!(discarded = cut, "dropping non-sequence bytes");
            self.buf.drain(..cut);
        }
    }
}

/// Lazy event iterator returned by [`SgrDecoder::feed`].
#[derive(Debug)]
pub struct Events<'a> {
    decoder: &'a mut SgrDecoder,
}

impl Iterator for Events<'_> {
    type Item = MouseEvent;

    fn next(&mut self) -> Option<MouseEvent> {
        self.decoder.next_event()
    }
}

fn find_introducer(buf: &[u8]) -> Option<usize> {
    buf.windows(INTRODUCER.len()).position(|w| w == INTRODUCER)
}

/// Decode the body between introducer and terminator into an event.
///
/// Returns `None` when the body does not split into exactly three
/// non-negative integer fields.
fn parse_sequence(body: &[u8], terminator: u8) -> Option<MouseEvent> {
    let text = std::str::from_utf8(body).ok()?;
    let mut fields = text.splitn(4, ';');
    let code = fields.next()?.parse::<u16>().ok()?;
    let x = fields.next()?.parse::<u16>().ok()?;
    let y = fields.next()?.parse::<u16>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(classify(code, x, y, terminator))
}

/// Map a wire button code and terminator to a typed event.
fn classify(code: u16, x: u16, y: u16, terminator: u8) -> MouseEvent {
    let (kind, button) = if terminator == b'm' {
        // Releases keep the wire code; SGR mode does not use it further.
        (MouseEventKind::Release, code)
    } else if code >= SCROLL_UP {
        // Anything above the wheel pair still reports as scroll-down.
        if code == SCROLL_UP {
            (MouseEventKind::ScrollUp, code)
        } else {
            (MouseEventKind::ScrollDown, code)
        }
    } else if code >= MOTION_FLAG {
        (MouseEventKind::Drag, code - MOTION_FLAG)
    } else {
        (MouseEventKind::Press, code)
    };
    MouseEvent::new(kind, button, x, y)
}
