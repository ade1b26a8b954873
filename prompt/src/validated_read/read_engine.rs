// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use unicode_width::UnicodeWidthStr;

use crate::{Color, ConsoleOptions, LineReader, NotificationContext, Pos, PromptBuffer,
            PromptBufferState, ReadLineError, ReadRequest, SharedRenderer, StdMutex,
            lock_or_recover, pos};

/// Runs the read, convert, validate, notify, retry loop for a single question.
///
/// The engine borrows everything it needs from the [`Console`](crate::Console) for the
/// duration of one [`Self::read_line()`] call. The console holds the line reader lock
/// for that whole duration, so two reads can't interleave their cursor moves. Terminal
/// writes lock the [`SharedRenderer`] for each group of writes that belong together.
#[allow(missing_debug_implementations)]
pub struct ReadEngine<'a> {
    pub renderer: &'a SharedRenderer,
    pub reader: &'a mut dyn LineReader,
    pub prompt_buffer: &'a StdMutex<PromptBuffer>,
    pub options: &'a ConsoleOptions,
}

impl ReadEngine<'_> {
    /// Keep asking until the input is valid. The prompt buffer is cleared when this
    /// returns, no matter how.
    ///
    /// # Errors
    ///
    /// - [`ReadLineError::FailFast`] on the first invalid input, if the console options
    ///   have `throw_on_invalid_input` set.
    /// - [`ReadLineError::RedirectedStream`] if `request` has a fixed position and the
    ///   terminal isn't interactive.
    /// - [`ReadLineError::InputClosed`] if the input ends before a valid line is read.
    /// - [`ReadLineError::Io`] if the terminal can't be read from or written to.
    pub fn read_line<T: 'static>(
        &mut self,
        request: &ReadRequest<T>,
    ) -> Result<T, ReadLineError> {
        let result = self.run_attempts(request);
        lock_or_recover(self.prompt_buffer).clear();
        result
    }

    fn run_attempts<T: 'static>(
        &mut self,
        request: &ReadRequest<T>,
    ) -> Result<T, ReadLineError> {
        let is_interactive = lock_or_recover(self.renderer).is_interactive();
        if request.position().is_some() && !is_interactive {
            return Err(ReadLineError::RedirectedStream);
        }

        // Stop recording the question (if one is being asked).
        let (question_origin, question_line_widths) = {
            let mut prompt_buffer = lock_or_recover(self.prompt_buffer);
            prompt_buffer.end_question();
            (prompt_buffer.origin(), prompt_buffer.line_widths())
        };

        let mut attempt: u64 = 0;
        loop {
            attempt += 1;

            let prompt_origin = self.write_prompt(request, is_interactive)?;

            let Some(raw) = self.read_raw_line(request)? else {
                tracing::debug!(message = "Input closed", attempt);
                return Err(ReadLineError::InputClosed);
            };

            let invalid_input = match request.evaluate(&raw) {
                Ok(value) => {
                    tracing::debug!(message = "Input accepted", attempt);
                    return Ok(value);
                }
                Err(invalid_input) => invalid_input,
            };
            tracing::debug!(message = "Input rejected", attempt, reason = %invalid_input);

            let needs_reposition = {
                let mut context = NotificationContext {
                    renderer: self.renderer,
                    reader: &mut *self.reader,
                    colors: &self.options.colors,
                };
                self.options
                    .notification_chain
                    .invoke_all(&mut context, invalid_input.message())?
            };

            if self.options.throw_on_invalid_input {
                return Err(ReadLineError::FailFast(invalid_input));
            }

            if needs_reposition
                && is_interactive
                && let Some(prompt_origin) = prompt_origin
            {
                // A fixed position prompt is erased from its own position. Otherwise
                // the whole question is erased, if one was asked.
                let (origin, mut line_widths) = match question_origin {
                    Some(question_origin) if request.position().is_none() => {
                        (question_origin, question_line_widths.clone())
                    }
                    _ => (prompt_origin, vec![0]),
                };
                if let Some(last) = line_widths.last_mut() {
                    *last += request.prompt_display_width() + raw.width();
                }
                if let Err(err) = self.erase_region(origin, &line_widths) {
                    tracing::debug!(message = "Reposition skipped", error = ?err);
                }
            }

            self.replay_question()?;
        }
    }

    /// Returns where the prompt starts, if the terminal can tell.
    fn write_prompt<T: 'static>(
        &self,
        request: &ReadRequest<T>,
        is_interactive: bool,
    ) -> io::Result<Option<Pos>> {
        let mut renderer = lock_or_recover(self.renderer);
        if let Some(position) = request.position() {
            renderer.set_cursor(position)?;
        }
        let prompt_origin = if is_interactive {
            renderer.get_cursor().ok()
        } else {
            None
        };
        for span in request.prompt() {
            renderer.write(&span.text, span.color)?;
        }
        if let Some(input_color) = request.get_input_color() {
            renderer.set_input_color(Some(input_color))?;
        }
        Ok(prompt_origin)
    }

    /// The renderer isn't locked while waiting for the user.
    fn read_raw_line<T: 'static>(
        &mut self,
        request: &ReadRequest<T>,
    ) -> io::Result<Option<String>> {
        let maybe_line = self.reader.read_line()?;
        let mut renderer = lock_or_recover(self.renderer);
        if request.get_input_color().is_some() {
            renderer.set_input_color(None)?;
        }
        if let Some(line) = &maybe_line {
            renderer.on_line_read(line)?;
        }
        Ok(maybe_line)
    }

    /// Overwrite each line of the region with spaces, then go back to `origin`. The
    /// first line starts at `origin.x`, the others at column 0.
    fn erase_region(&self, origin: Pos, line_widths: &[usize]) -> io::Result<()> {
        let mut renderer = lock_or_recover(self.renderer);
        for (index, width) in line_widths.iter().enumerate() {
            let row_offset = u16::try_from(index).unwrap_or(u16::MAX);
            let col = if index == 0 { origin.x } else { 0 };
            renderer.set_cursor(pos(col, origin.y.saturating_add(row_offset)))?;
            renderer.write(&" ".repeat(*width), Color::default())?;
        }
        renderer.set_cursor(origin)
    }

    fn replay_question(&self) -> io::Result<()> {
        let prompt_buffer = lock_or_recover(self.prompt_buffer);
        if prompt_buffer.state() != PromptBufferState::Armed {
            return Ok(());
        }
        let mut renderer = lock_or_recover(self.renderer);
        prompt_buffer.replay(&mut **renderer)
    }
}
