//! Terminal implementations of the platform seams plus line rendering.
//!
//! DESIGN
//! ======
//! The terminal has no clipboard, so every Quick Meet copy falls through to
//! the prompt path and prints the link. The local UTC offset is captured once
//! at startup while the process is still single-threaded; `time` refuses to
//! read it later on Unix.

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use time::{OffsetDateTime, UtcOffset};
use truetalk::{Clipboard, ClipboardError, DisplayMessage, Environment, Notifier};

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

/// Prints notices to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        println!("{message}");
    }

    fn prompt(&self, message: &str, value: &str) {
        println!("{message}\n{value}");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalClipboard;

#[async_trait(?Send)]
impl Clipboard for TerminalClipboard {
    fn is_available(&self) -> bool {
        false
    }

    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

/// System clock, `rand` randomness and a fixed local offset.
#[derive(Clone, Copy, Debug)]
pub struct TerminalEnvironment {
    offset: UtcOffset,
}

impl TerminalEnvironment {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Reads the local offset, falling back to UTC when the platform
    /// cannot report it.
    pub fn detect() -> Self {
        let offset = UtcOffset::current_local_offset().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "local offset unavailable; using UTC");
            UtcOffset::UTC
        });
        Self::new(offset)
    }
}

impl Environment for TerminalEnvironment {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    fn random_fraction(&self) -> f64 {
        rand::random::<f64>()
    }

    fn local_offset(&self, _at: OffsetDateTime) -> UtcOffset {
        self.offset
    }
}

/// Parse `#RRGGBB` into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Wrap `text` in a 24-bit ANSI foreground color. Unparseable colors leave
/// the text untouched.
pub fn paint(text: &str, color: &str) -> String {
    match parse_hex_rgb(color) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m"),
        None => text.to_owned(),
    }
}

/// One conversation line: `[time] author: text`. The author is painted with
/// its accent color when `color` is given.
pub fn render_line(message: &DisplayMessage, color: Option<&str>) -> String {
    let author = match color {
        Some(color) => paint(&message.author, color),
        None => message.author.clone(),
    };
    format!("[{}] {author}: {}", message.time, message.text)
}
