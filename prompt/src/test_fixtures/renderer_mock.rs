// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io, sync::Arc};

use crate::{Color, Pos, Renderer, Size, StdMutex, lock_or_recover, pos, size};

/// Everything a [`RendererMock`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    Write { text: String, color: Color },
    WriteLine { text: String, color: Color },
    WriteErr { text: String, color: Color },
    Beep,
    SetCursor(Pos),
    SaveCursor,
    RestoreCursor,
    SetInputColor(Option<Color>),
    /// The terminal echoed a line the user typed (only when interactive).
    Echo(String),
}

/// A [`Renderer`] that records every [`RenderOp`] and also paints the text onto a
/// virtual screen, tracking the cursor the way a terminal would. This makes it possible
/// to assert on what the user actually sees after a few retries (eg: that erasing and
/// replaying a question leaves the screen unchanged).
///
/// Cloning is cheap and every clone shares the same state, so a test can keep a clone
/// after moving the renderer into a [`Console`](crate::Console).
#[derive(Clone, Debug)]
pub struct RendererMock {
    pub state: Arc<StdMutex<RendererMockState>>,
}

#[derive(Debug)]
pub struct RendererMockState {
    pub ops: Vec<RenderOp>,
    pub cursor: Pos,
    /// Where [`Renderer::save_cursor()`] left the cursor, like the terminal's single
    /// save slot.
    pub saved_cursor: Option<Pos>,
    pub size: Size,
    pub is_interactive: bool,
    pub screen: Vec<Vec<char>>,
    pub stderr_lines: Vec<String>,
}

impl Default for RendererMock {
    fn default() -> Self { Self::new_interactive(size(80, 24)) }
}

impl RendererMock {
    #[must_use]
    pub fn new_interactive(size: Size) -> Self { Self::new(size, true) }

    /// Behaves like a terminal with stdin or stdout redirected: every cursor or size
    /// query fails, and typed input isn't echoed.
    #[must_use]
    pub fn new_redirected() -> Self { Self::new(size(80, 24), false) }

    fn new(size: Size, is_interactive: bool) -> Self {
        Self {
            state: Arc::new(StdMutex::new(RendererMockState {
                ops: vec![],
                cursor: Pos::default(),
                saved_cursor: None,
                size,
                is_interactive,
                screen: vec![],
                stderr_lines: vec![],
            })),
        }
    }

    /// Start with the cursor somewhere other than the top left corner.
    #[must_use]
    pub fn with_cursor(self, cursor: Pos) -> Self {
        lock_or_recover(&self.state).cursor = cursor;
        self
    }

    #[must_use]
    pub fn ops(&self) -> Vec<RenderOp> { lock_or_recover(&self.state).ops.clone() }

    #[must_use]
    pub fn cursor(&self) -> Pos { lock_or_recover(&self.state).cursor }

    #[must_use]
    pub fn stderr_lines(&self) -> Vec<String> {
        lock_or_recover(&self.state).stderr_lines.clone()
    }

    #[must_use]
    pub fn count_ops(&self, predicate: impl Fn(&RenderOp) -> bool) -> usize {
        lock_or_recover(&self.state)
            .ops
            .iter()
            .filter(|op| predicate(op))
            .count()
    }

    #[must_use]
    pub fn beep_count(&self) -> usize { self.count_ops(|op| *op == RenderOp::Beep) }

    /// Rows of the virtual screen with trailing whitespace removed. Trailing blank rows
    /// are dropped.
    #[must_use]
    pub fn screen_lines(&self) -> Vec<String> {
        let state = lock_or_recover(&self.state);
        let mut lines: Vec<String> = state
            .screen
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect();
        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        lines
    }

    /// A single row of the virtual screen, with trailing whitespace removed.
    #[must_use]
    pub fn screen_row(&self, row: u16) -> String {
        let state = lock_or_recover(&self.state);
        state
            .screen
            .get(usize::from(row))
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// Everything written to the output stream in order, as if it were captured from a
    /// pipe. Cursor moves are ignored.
    #[must_use]
    pub fn transcript(&self) -> String {
        let state = lock_or_recover(&self.state);
        let mut acc = String::new();
        for op in &state.ops {
            match op {
                RenderOp::Write { text, .. } => acc.push_str(text),
                RenderOp::WriteLine { text, .. } => {
                    acc.push_str(text);
                    acc.push('\n');
                }
                RenderOp::Echo(line) => {
                    acc.push_str(line);
                    acc.push('\n');
                }
                RenderOp::WriteErr { .. }
                | RenderOp::Beep
                | RenderOp::SetCursor(_)
                | RenderOp::SaveCursor
                | RenderOp::RestoreCursor
                | RenderOp::SetInputColor(_) => {}
            }
        }
        acc
    }
}

impl RendererMockState {
    fn paint(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.cursor = pos(0, self.cursor.y.saturating_add(1));
                continue;
            }
            let row_index = usize::from(self.cursor.y);
            let col_index = usize::from(self.cursor.x);
            if self.screen.len() <= row_index {
                self.screen.resize(row_index + 1, vec![]);
            }
            let row = &mut self.screen[row_index];
            if row.len() <= col_index {
                row.resize(col_index + 1, ' ');
            }
            row[col_index] = ch;
            self.cursor.x = self.cursor.x.saturating_add(1);
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

impl Renderer for RendererMock {
    fn write(&mut self, text: &str, color: Color) -> io::Result<()> {
        let mut state = lock_or_recover(&self.state);
        state.paint(text);
        state.ops.push(RenderOp::Write {
            text: text.to_string(),
            color,
        });
        Ok(())
    }

    fn write_line(&mut self, text: &str, color: Color) -> io::Result<()> {
        let mut state = lock_or_recover(&self.state);
        state.paint(text);
        state.paint("\n");
        state.ops.push(RenderOp::WriteLine {
            text: text.to_string(),
            color,
        });
        Ok(())
    }

    fn write_err_line(&mut self, text: &str, color: Color) -> io::Result<()> {
        let mut state = lock_or_recover(&self.state);
        state.stderr_lines.push(text.to_string());
        state.ops.push(RenderOp::WriteErr {
            text: text.to_string(),
            color,
        });
        Ok(())
    }

    fn beep(&mut self) -> io::Result<()> {
        lock_or_recover(&self.state).ops.push(RenderOp::Beep);
        Ok(())
    }

    fn set_cursor(&mut self, pos: Pos) -> io::Result<()> {
        let mut state = lock_or_recover(&self.state);
        state.ensure_interactive()?;
        state.cursor = pos;
        state.ops.push(RenderOp::SetCursor(pos));
        Ok(())
    }

    fn get_cursor(&mut self) -> io::Result<Pos> {
        let state = lock_or_recover(&self.state);
        state.ensure_interactive()?;
        Ok(state.cursor)
    }

    fn save_cursor(&mut self) -> io::Result<()> {
        let mut state = lock_or_recover(&self.state);
        state.ensure_interactive()?;
        state.saved_cursor = Some(state.cursor);
        state.ops.push(RenderOp::SaveCursor);
        Ok(())
    }

    /// Nothing saved means the top left corner, same as a terminal.
    fn restore_cursor(&mut self) -> io::Result<()> {
        let mut state = lock_or_recover(&self.state);
        state.ensure_interactive()?;
        state.cursor = state.saved_cursor.unwrap_or_default();
        state.ops.push(RenderOp::RestoreCursor);
        Ok(())
    }

    fn size(&mut self) -> io::Result<Size> {
        let state = lock_or_recover(&self.state);
        state.ensure_interactive()?;
        Ok(state.size)
    }

    fn set_input_color(&mut self, color: Option<Color>) -> io::Result<()> {
        lock_or_recover(&self.state)
            .ops
            .push(RenderOp::SetInputColor(color));
        Ok(())
    }

    fn on_line_read(&mut self, line: &str) -> io::Result<()> {
        let mut state = lock_or_recover(&self.state);
        if state.is_interactive {
            state.paint(line);
            state.paint("\n");
            state.ops.push(RenderOp::Echo(line.to_string()));
        }
        Ok(())
    }

    fn is_interactive(&self) -> bool { lock_or_recover(&self.state).is_interactive }
}
