// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use smallvec::SmallVec;
use strum_macros::Display;
use unicode_width::UnicodeWidthStr;

use crate::{Color, Pos, Renderer};

/// One recorded write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBufferEntry {
    pub text: String,
    pub color: Color,
    pub is_line_break: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum PromptBufferState {
    /// Empty, and writes aren't recorded.
    #[default]
    Idle,
    /// A question is being asked, and every write is recorded.
    Recording,
    /// The question has been asked, and the read loop is waiting for an answer. The
    /// entries are kept so they can be replayed before a retry.
    Armed,
}

/// Records everything that is written between [`Console::ask()`] and the next read, so
/// the question can be drawn again, exactly as it was, before each retry.
///
/// ```text
/// Idle ──begin_question()──▶ Recording ──end_question()──▶ Armed ──clear()──▶ Idle
///                                                          │  ▲
///                                                          └──┘ replay()
/// ```
///
/// [`Console::ask()`]: crate::Console::ask
#[derive(Debug, Default)]
pub struct PromptBuffer {
    entries: SmallVec<[PromptBufferEntry; 8]>,
    state: PromptBufferState,
    origin: Option<Pos>,
}

impl PromptBuffer {
    /// Clears the buffer and starts recording. `origin` is where the cursor was when the
    /// question started (`None` if the terminal isn't interactive).
    pub fn begin_question(&mut self, origin: Option<Pos>) {
        self.entries.clear();
        self.origin = origin;
        self.set_state(PromptBufferState::Recording);
    }

    /// No-op unless recording.
    pub fn record(&mut self, text: &str, color: Color, is_line_break: bool) {
        if self.state != PromptBufferState::Recording {
            return;
        }
        self.entries.push(PromptBufferEntry {
            text: text.to_string(),
            color,
            is_line_break,
        });
    }

    /// Stops recording, and keeps the entries.
    pub fn end_question(&mut self) {
        if self.state == PromptBufferState::Recording {
            self.set_state(PromptBufferState::Armed);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.origin = None;
        self.set_state(PromptBufferState::Idle);
    }

    #[must_use]
    pub fn state(&self) -> PromptBufferState { self.state }

    #[must_use]
    pub fn entries(&self) -> &[PromptBufferEntry] { &self.entries }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Where the question started, only while it is being asked or armed.
    #[must_use]
    pub fn origin(&self) -> Option<Pos> {
        match self.state {
            PromptBufferState::Idle => None,
            PromptBufferState::Recording | PromptBufferState::Armed => self.origin,
        }
    }

    /// Display width of each screen line that the recorded entries occupy. There is
    /// always at least one line, the last one is the line the cursor ends up on.
    #[must_use]
    pub fn line_widths(&self) -> Vec<usize> {
        let mut acc = vec![0];
        for entry in &self.entries {
            let mut segments = entry.text.split('\n').peekable();
            while let Some(segment) = segments.next() {
                if let Some(last) = acc.last_mut() {
                    *last += segment.width();
                }
                if segments.peek().is_some() {
                    acc.push(0);
                }
            }
            if entry.is_line_break {
                acc.push(0);
            }
        }
        acc
    }

    /// Writes every entry again, in order. This goes straight to the renderer, so nothing
    /// is recorded twice.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails to write.
    pub fn replay(&self, renderer: &mut dyn Renderer) -> io::Result<()> {
        for entry in &self.entries {
            if entry.is_line_break {
                renderer.write_line(&entry.text, entry.color)?;
            } else {
                renderer.write(&entry.text, entry.color)?;
            }
        }
        Ok(())
    }

    fn set_state(&mut self, new_state: PromptBufferState) {
        tracing::trace!(
            message = "PromptBuffer state change",
            from = %self.state,
            to = %new_state,
            entries = self.entries.len()
        );
        self.state = new_state;
    }
}
