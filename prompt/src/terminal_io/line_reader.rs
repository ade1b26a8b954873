// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, BufRead};

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::{StdinIsPipedResult, is_stdin_piped};

/// The source of raw user input for the read loop. The line reader is also handed to
/// notification behaviors that wait for a key press (eg: a status bar with a zero
/// duration).
pub trait LineReader {
    /// Read one line, with the trailing line terminator removed. Returns `Ok(None)` when
    /// the input is exhausted (EOF).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying stream can't be read.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Block until a single key is pressed. Returns `Ok(None)` if no key can ever arrive
    /// (eg: stdin is piped, or the input is exhausted).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying stream can't be read.
    fn read_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

/// Reads lines from the process' stdin, in cooked mode, so the terminal takes care of
/// echo and line editing.
#[derive(Debug, Default)]
pub struct StdinLineReader;

impl LineReader for StdinLineReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        let bytes_read = io::stdin().lock().read_line(&mut buffer)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_terminator(buffer)))
    }

    fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        if is_stdin_piped() == StdinIsPipedResult::StdinIsPiped {
            return Ok(None);
        }

        let _raw_mode = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key_event) = crossterm::event::read()?
                && key_event.kind == KeyEventKind::Press
            {
                return Ok(Some(key_event));
            }
        }
    }
}

/// Removes a single trailing `\n` or `\r\n`.
#[must_use]
pub fn trim_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Raw mode is needed to get a single key press without waiting for Enter. It is
/// disabled again when this guard drops, even if reading the key fails.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = crossterm::terminal::disable_raw_mode() {
            tracing::warn!(message = "Failed to disable raw mode", error = ?err);
        }
    }
}
