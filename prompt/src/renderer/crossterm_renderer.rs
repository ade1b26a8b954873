// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use crossterm::{cursor::{MoveTo, RestorePosition, SavePosition},
                style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor}};

use crate::{Color, OutputDevice, Pos, Renderer, SendRawTerminal, Size, TTYResult,
            execute_commands_no_lock, get_terminal_size, is_fully_interactive, pos,
            queue_commands_no_lock};

const BELL: &str = "\x07";

/// A [`Renderer`] that writes ANSI escape sequences (via [`crossterm`]) to a pair of
/// [`OutputDevice`]s, one for regular output and one for errors.
#[allow(missing_debug_implementations)]
pub struct CrosstermRenderer {
    pub output_device: OutputDevice,
    pub error_device: OutputDevice,
    pub is_interactive: bool,
}

impl Default for CrosstermRenderer {
    fn default() -> Self { Self::new_stdout() }
}

impl CrosstermRenderer {
    /// Renderer for stdout and stderr. It is interactive only if both stdin and stdout
    /// are attached to a TTY.
    #[must_use]
    pub fn new_stdout() -> Self {
        Self::new(
            OutputDevice::new_stdout(),
            OutputDevice::new_stderr(),
            is_fully_interactive() == TTYResult::IsInteractive,
        )
    }

    /// A renderer writing to a mock device is never interactive, since there is no real
    /// terminal to ask for the cursor position or size.
    #[must_use]
    pub fn new(
        output_device: OutputDevice,
        error_device: OutputDevice,
        is_interactive: bool,
    ) -> Self {
        let is_interactive =
            is_interactive && !output_device.is_mock && !error_device.is_mock;
        Self {
            output_device,
            error_device,
            is_interactive,
        }
    }

    fn ensure_interactive(&self) -> io::Result<()> {
        if self.is_interactive {
            Ok(())
        } else {
            Err(io::Error::other("Can't use the cursor on a redirected stream"))
        }
    }
}

/// Writes `text` in `color`. Color escape sequences are only emitted for the layers that
/// are set, and the colors are reset right after.
fn write_colored(
    writer: &mut SendRawTerminal,
    text: &str,
    color: Color,
    line_break: bool,
) -> io::Result<()> {
    queue_color(writer, color)?;
    queue_commands_no_lock!(writer, Print(text));
    if !color.is_default() {
        queue_commands_no_lock!(writer, ResetColor);
    }
    if line_break {
        queue_commands_no_lock!(writer, Print("\n"));
    }
    writer.flush()
}

fn queue_color(writer: &mut SendRawTerminal, color: Color) -> io::Result<()> {
    if let Some(fg) = color.fg {
        queue_commands_no_lock!(writer, SetForegroundColor(fg.into()));
    }
    if let Some(bg) = color.bg {
        queue_commands_no_lock!(writer, SetBackgroundColor(bg.into()));
    }
    Ok(())
}

impl Renderer for CrosstermRenderer {
    fn write(&mut self, text: &str, color: Color) -> io::Result<()> {
        write_colored(&mut *self.output_device.lock(), text, color, false)
    }

    fn write_line(&mut self, text: &str, color: Color) -> io::Result<()> {
        write_colored(&mut *self.output_device.lock(), text, color, true)
    }

    fn write_err_line(&mut self, text: &str, color: Color) -> io::Result<()> {
        write_colored(&mut *self.error_device.lock(), text, color, true)
    }

    fn beep(&mut self) -> io::Result<()> {
        let writer = &mut *self.output_device.lock();
        execute_commands_no_lock!(writer, Print(BELL));
        Ok(())
    }

    fn set_cursor(&mut self, pos: Pos) -> io::Result<()> {
        self.ensure_interactive()?;
        let writer = &mut *self.output_device.lock();
        execute_commands_no_lock!(writer, MoveTo(pos.x, pos.y));
        Ok(())
    }

    fn get_cursor(&mut self) -> io::Result<Pos> {
        self.ensure_interactive()?;
        let (x, y) = crossterm::cursor::position()?;
        Ok(pos(x, y))
    }

    fn save_cursor(&mut self) -> io::Result<()> {
        self.ensure_interactive()?;
        let writer = &mut *self.output_device.lock();
        execute_commands_no_lock!(writer, SavePosition);
        Ok(())
    }

    fn restore_cursor(&mut self) -> io::Result<()> {
        self.ensure_interactive()?;
        let writer = &mut *self.output_device.lock();
        execute_commands_no_lock!(writer, RestorePosition);
        Ok(())
    }

    fn size(&mut self) -> io::Result<Size> {
        self.ensure_interactive()?;
        Ok(get_terminal_size())
    }

    fn set_input_color(&mut self, color: Option<Color>) -> io::Result<()> {
        let writer = &mut *self.output_device.lock();
        match color {
            Some(color) => queue_color(writer, color)?,
            None => queue_commands_no_lock!(writer, ResetColor),
        }
        writer.flush()
    }

    fn is_interactive(&self) -> bool { self.is_interactive }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ConsoleColor, CrosstermRendererMock, StdoutMock};

    fn mock_renderer() -> (CrosstermRenderer, StdoutMock, StdoutMock) {
        let CrosstermRendererMock {
            renderer,
            stdout_mock,
            stderr_mock,
        } = CrosstermRendererMock::new();
        (renderer, stdout_mock, stderr_mock)
    }

    #[test]
    fn test_mock_device_is_never_interactive() {
        let (mut renderer, stdout_mock, _) = mock_renderer();
        assert!(!renderer.is_interactive());
        assert!(renderer.get_cursor().is_err());
        assert!(renderer.set_cursor(pos(0, 0)).is_err());
        assert!(renderer.save_cursor().is_err());
        assert!(renderer.restore_cursor().is_err());
        assert!(renderer.size().is_err());
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }

    #[test]
    fn test_plain_write_has_no_escape_sequences() {
        let (mut renderer, stdout_mock, _) = mock_renderer();
        renderer.write("age? ", Color::default()).unwrap();
        renderer.write_line("ok", Color::default()).unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "age? ok\n");
    }

    #[test]
    fn test_colored_write_resets_color() {
        let (mut renderer, stdout_mock, _) = mock_renderer();
        renderer.write("red", Color::fg(ConsoleColor::Red)).unwrap();
        let raw = stdout_mock.get_copy_of_buffer_as_string();
        assert!(raw.contains("\x1b["));
        assert!(raw.ends_with("\x1b[0m"));
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "red");
    }

    #[test]
    fn test_write_err_line_goes_to_error_device() {
        let (mut renderer, stdout_mock, stderr_mock) = mock_renderer();
        renderer
            .write_err_line("bad", Color::fg(ConsoleColor::DarkRed))
            .unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
        assert_eq!(stderr_mock.get_copy_of_buffer_as_string_strip_ansi(), "bad\n");
    }

    #[test]
    fn test_beep_writes_bell() {
        let (mut renderer, stdout_mock, _) = mock_renderer();
        renderer.beep().unwrap();
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), BELL);
    }
}
