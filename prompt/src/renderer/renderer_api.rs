// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io, sync::Arc};

use crate::{Color, StdMutex};

/// A cursor position, 0 based, `x` is the column and `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

#[must_use]
pub const fn pos(x: u16, y: u16) -> Pos { Pos { x, y } }

/// Terminal size in columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub cols: u16,
    pub rows: u16,
}

#[must_use]
pub const fn size(cols: u16, rows: u16) -> Size { Size { cols, rows } }

/// The terminal is shared by the console (the read loop and plain writes) and by
/// notification behaviors, including the status bar restore thread. All terminal writes
/// go through this lock, and a sequence of writes that must not be interleaved (eg: move
/// cursor, write, move back) is done while holding it.
pub type SharedRenderer = Arc<StdMutex<Box<dyn Renderer + Send>>>;

pub fn new_shared_renderer(renderer: impl Renderer + Send + 'static) -> SharedRenderer {
    Arc::new(StdMutex::new(Box::new(renderer)))
}

/// Everything the console needs from a terminal. [`CrosstermRenderer`] is the real one,
/// and [`RendererMock`] records the ops so that tests can assert on them.
///
/// [`CrosstermRenderer`]: crate::CrosstermRenderer
/// [`RendererMock`]: crate::RendererMock
pub trait Renderer {
    /// Write `text` in `color`, then restore the terminal's colors.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device can't be written to.
    fn write(&mut self, text: &str, color: Color) -> io::Result<()>;

    /// Same as [`Self::write()`], followed by a line break.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device can't be written to.
    fn write_line(&mut self, text: &str, color: Color) -> io::Result<()>;

    /// Write `text` followed by a line break to the error stream (stderr).
    ///
    /// # Errors
    ///
    /// Returns an error if the error device can't be written to.
    fn write_err_line(&mut self, text: &str, color: Color) -> io::Result<()>;

    /// Ring the terminal bell.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device can't be written to.
    fn beep(&mut self) -> io::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the terminal isn't interactive.
    fn set_cursor(&mut self, pos: Pos) -> io::Result<()>;

    /// Asks the terminal where the cursor is. The terminal replies on stdin, so this must
    /// only be called from the thread that reads input, never while a read is pending.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal isn't interactive.
    fn get_cursor(&mut self) -> io::Result<Pos>;

    /// Remember the cursor position, without asking the terminal where it is. Unlike
    /// [`Self::get_cursor()`], this is safe to call from a background thread while the
    /// foreground is blocked reading a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal isn't interactive.
    fn save_cursor(&mut self) -> io::Result<()>;

    /// Move the cursor back to where [`Self::save_cursor()`] left it.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal isn't interactive.
    fn restore_cursor(&mut self) -> io::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the terminal isn't interactive.
    fn size(&mut self) -> io::Result<Size>;

    /// Set (or with `None`, reset) the colors that the user's typed input is echoed in.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device can't be written to.
    fn set_input_color(&mut self, color: Option<Color>) -> io::Result<()>;

    /// Called with every line that the read loop receives. A real terminal echoes typed
    /// input by itself, so this does nothing by default.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device can't be written to.
    fn on_line_read(&mut self, _line: &str) -> io::Result<()> { Ok(()) }

    /// `false` if stdin or stdout is redirected, in which case cursor positioning is
    /// never attempted.
    fn is_interactive(&self) -> bool;
}
