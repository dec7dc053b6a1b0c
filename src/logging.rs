//! Log lines with timestamps, source locations and optional ANSI colour.
//!
//! The [`sslog!`] macro writes lines shaped like:
//!
//! ```text
//! 20250320T14:30:00.000 - src/web_client/handlers/messages.rs:42 - sent m-msg1742 to u-user1
//! ```
//!
//! On a terminal the timestamp and location are dimmed and peer ids get a
//! stable colour derived from their text. Output goes to stderr until
//! [`set_writer`] installs another destination (which also turns colour off).

use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex};

use chrono::Utc;

static COLOUR_ENABLED: AtomicBool = AtomicBool::new(false);

static LOG_WRITER: LazyLock<Mutex<Box<dyn Write + Send>>> =
    LazyLock::new(|| Mutex::new(Box::new(io::stderr())));

/// Enable colour when stderr is a terminal. Call once at startup.
pub fn init() {
    COLOUR_ENABLED.store(io::stderr().is_terminal(), Ordering::Relaxed);
}

/// Send all further log lines to `w`, without colour codes.
pub fn set_writer(w: Box<dyn Write + Send>) {
    COLOUR_ENABLED.store(false, Ordering::Relaxed);
    *LOG_WRITER.lock().unwrap_or_else(|e| e.into_inner()) = w;
}

pub fn colour_enabled() -> bool {
    COLOUR_ENABLED.load(Ordering::Relaxed)
}

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const MSG_ID_COLOUR: &str = "\x1b[93m";

const PEER_COLOURS: &[&str] = &[
    "\x1b[91m", "\x1b[92m", "\x1b[94m", "\x1b[95m", "\x1b[96m", "\x1b[32m", "\x1b[34m",
    "\x1b[35m", "\x1b[36m",
];

const SHORT_ID_LEN: usize = 8;

fn peer_colour(id: &str) -> &'static str {
    let hash = id
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    PEER_COLOURS[hash as usize % PEER_COLOURS.len()]
}

fn short(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// `u-<id>` for a peer or user id, coloured per id on a terminal.
pub fn peer_id(id: &str) -> String {
    let id = short(id);
    if colour_enabled() {
        format!("{}u-{id}{RESET}", peer_colour(id))
    } else {
        format!("u-{id}")
    }
}

/// `m-<id>` for a message id.
pub fn msg_id(id: &str) -> String {
    let id = short(id);
    if colour_enabled() {
        format!("{MSG_ID_COLOUR}m-{id}{RESET}")
    } else {
        format!("m-{id}")
    }
}

/// Current UTC time as `YYYYMMDDTHH:MM:SS.mmm`.
pub fn format_timestamp() -> String {
    Utc::now().format("%Y%m%dT%H:%M:%S%.3f").to_string()
}

/// Write one log line. Use [`sslog!`] instead of calling this directly.
pub fn emit(file: &str, line: u32, msg: &str) {
    let ts = format_timestamp();
    let formatted = if colour_enabled() {
        format!("{DIM}{ts}{RESET} {DIM}{file}:{line}{RESET} {msg}")
    } else {
        format!("{ts} - {file}:{line} - {msg}")
    };
    let mut writer = LOG_WRITER.lock().unwrap_or_else(|e| e.into_inner());
    let _ = writeln!(*writer, "{formatted}");
}

/// Log a formatted line with timestamp and call site.
///
/// ```ignore
/// sslog!("selected conversation with {}", logging::peer_id(&peer));
/// ```
#[macro_export]
macro_rules! sslog {
    ($($arg:tt)*) => {{
        $crate::logging::emit(file!(), line!(), &format!($($arg)*));
    }};
}
