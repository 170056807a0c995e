//! Terminal mode control for mouse capture.
//!
//! Puts the terminal into raw mode and enables xterm mouse tracking
//! (button events, optional motion events, SGR extended encoding), and
//! guarantees both are undone when the guard is dropped.

use std::io::{self, Write};

use tracing::debug;

/// DECSET 1000: report button press and release.
const ENABLE_BUTTON_TRACKING: &[u8] = b"\x1b[?1000h";
/// DECSET 1002: also report motion while a button is held.
const ENABLE_MOTION_TRACKING: &[u8] = b"\x1b[?1002h";
/// DECSET 1006: SGR extended encoding (`ESC [ < ... M/m`).
const ENABLE_SGR_MODE: &[u8] = b"\x1b[?1006h";

const DISABLE_BUTTON_TRACKING: &[u8] = b"\x1b[?1000l";
const DISABLE_MOTION_TRACKING: &[u8] = b"\x1b[?1002l";
const DISABLE_SGR_MODE: &[u8] = b"\x1b[?1006l";

/// RAII guard over raw mode and mouse tracking.
///
/// [`MouseTracking::enable`] switches the terminal to raw mode and writes
/// the tracking escapes; dropping the guard writes the matching disable
/// escapes and restores cooked mode. Teardown failures are ignored, the
/// terminal may already be gone.
#[derive(Debug)]
pub struct MouseTracking {
    motion: bool,
}

impl MouseTracking {
    /// Enter raw mode and enable SGR mouse reporting on stdout.
    ///
    /// `motion` controls whether drag events are reported (DECSET 1002).
    pub fn enable(motion: bool) -> io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;

        let mut out = io::stdout();
        if let Err(err) = write_tracking_escapes(&mut out, motion) {
            // Raw mode must not outlive a failed enable.
            let _ = crossterm::terminal::disable_raw_mode();
            return Err(err);
        }

        debug!(motion, "mouse tracking enabled");
        Ok(Self { motion })
    }
}

fn write_tracking_escapes(out: &mut impl Write, motion: bool) -> io::Result<()> {
    out.write_all(ENABLE_BUTTON_TRACKING)?;
    if motion {
        out.write_all(ENABLE_MOTION_TRACKING)?;
    }
    out.write_all(ENABLE_SGR_MODE)?;
    out.flush()
}

impl Drop for MouseTracking {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = out.write_all(DISABLE_SGR_MODE);
        if self.motion {
            let _ = out.write_all(DISABLE_MOTION_TRACKING);
        }
        let _ = out.write_all(DISABLE_BUTTON_TRACKING);
        let _ = out.flush();
        let _ = crossterm::terminal::disable_raw_mode();
        debug!("mouse tracking disabled");
    }
}
