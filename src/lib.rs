//! mousecap - capture and decode SGR terminal mouse events.
//!
//! The library is organized around one core component and its plumbing:
//!
//! - [`decoder`]: the streaming SGR mouse sequence decoder (the heart of
//!   the crate; everything else is I/O around it)
//! - [`capture`]: the read loop and event sink
//! - [`terminal`]: raw mode and mouse tracking control
//! - [`config`]: TOML configuration
//! - [`cli`]: clap command definitions (shared with xtask for man pages)
//!
//! Library users typically only need the decoder:
//!
//! ```
//! use mousecap::SgrDecoder;
//!
//! let mut decoder = SgrDecoder::new();
//! for event in decoder.feed(b"\x1b[<64;10;5M") {
//!     println!("{event}");
//! }
//! ```

pub mod capture;
pub mod cli;
pub mod config;
pub mod decoder;
pub mod terminal;

pub use capture::{CaptureError, EventSink, OutputFormat, StopReason};
pub use config::Config;
pub use decoder::{MouseEvent, MouseEventKind, SgrDecoder};

/// Version string shown by `mousecap --version`.
///
/// Dev builds append the git commit hash and build date; builds with the
/// `release` feature carry the build date only.
pub fn version() -> String {
    let pkg = env!("CARGO_PKG_VERSION");
    let date = env!("MOUSECAP_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} ({} {})", pkg, sha, date),
        None => format!("{} ({})", pkg, date),
    }
}
