// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words isatty

use std::io::{self, IsTerminal};

use crate::{Size, size};

pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// Get the terminal size. If there is a problem, return the default size, so that the
/// status bar still has a row to draw on.
#[must_use]
pub fn get_terminal_size() -> Size { size_or_default(crossterm::terminal::size()) }

/// Some terminals (eg: a freshly spawned PTY) report zero columns or rows, which is
/// treated like an error.
fn size_or_default(result: io::Result<(u16, u16)>) -> Size {
    match result {
        Ok((cols, rows)) if cols > 0 && rows > 0 => size(cols, rows),
        Ok(_) | Err(_) => size(DEFAULT_WIDTH, DEFAULT_HEIGHT),
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum StdinIsPipedResult {
    StdinIsPiped,
    StdinIsNotPiped,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum StdoutIsPipedResult {
    StdoutIsPiped,
    StdoutIsNotPiped,
}

/// If you run `echo "test" | cargo run` the following will return
/// [`StdinIsPipedResult::StdinIsPiped`].
#[must_use]
pub fn is_stdin_piped() -> StdinIsPipedResult {
    if std::io::stdin().is_terminal() {
        StdinIsPipedResult::StdinIsNotPiped
    } else {
        StdinIsPipedResult::StdinIsPiped
    }
}

/// If you run `cargo run | grep foo` the following will return
/// [`StdoutIsPipedResult::StdoutIsPiped`].
#[must_use]
pub fn is_stdout_piped() -> StdoutIsPipedResult {
    if std::io::stdout().is_terminal() {
        StdoutIsPipedResult::StdoutIsNotPiped
    } else {
        StdoutIsPipedResult::StdoutIsPiped
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

/// Returns [`TTYResult::IsInteractive`] only if both stdin and stdout are attached to
/// a TTY, and the process isn't running in CI. Cursor positioning (which is needed to
/// erase a previous attempt, or to print at a fixed position) is only attempted when
/// this is the case.
#[must_use]
pub fn is_fully_interactive() -> TTYResult {
    let stdin_is_tty = is_stdin_piped() == StdinIsPipedResult::StdinIsNotPiped;
    let stdout_is_tty = is_stdout_piped() == StdoutIsPipedResult::StdoutIsNotPiped;
    if stdin_is_tty && stdout_is_tty && !is_ci::cached() {
        TTYResult::IsInteractive
    } else {
        TTYResult::IsNotInteractive
    }
}
