//! Raw mode RAII guards.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Guard that ensures raw mode is disabled when dropped.
pub struct RawModeGuard {
    was_enabled: bool,
}

impl RawModeGuard {
    /// Enable raw mode, returning a guard that will disable it on drop.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { was_enabled: true })
    }

    /// Manually disable raw mode (also happens on drop).
    pub fn disable(&mut self) {
        if self.was_enabled {
            let _ = disable_raw_mode();
            self.was_enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}

/// Full-screen session: raw mode, hidden cursor, mouse and focus reporting.
/// Everything is switched back off on drop.
pub struct ScreenGuard {
    raw: RawModeGuard,
}

impl ScreenGuard {
    pub fn new() -> io::Result<Self> {
        let raw = RawModeGuard::new()?;
        let mut out = io::stdout();
        execute!(out, EnableMouseCapture, EnableFocusChange, Hide)?;
        write!(out, "\x1b[2J\x1b[H")?;
        out.flush()?;
        Ok(Self { raw })
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(out, DisableMouseCapture, DisableFocusChange, Show);
        let _ = write!(out, "\x1b[0m\x1b[2J\x1b[H");
        let _ = out.flush();
        self.raw.disable();
    }
}
