// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io,
          sync::Arc,
          thread::{self, JoinHandle},
          time::Duration};

use unicode_width::UnicodeWidthChar;

use crate::{Color, NotificationBehavior, NotificationContext, NotificationKind,
            SharedRenderer, StdMutex, lock_or_recover, pos};

pub const DEFAULT_STATUS_BAR_DURATION: Duration = Duration::from_millis(1000);

/// Flashes the message on the last row of the terminal, then blanks that row again
/// once `duration` has passed. The timer runs on a background thread, so the user can
/// start typing the next attempt right away. A zero duration waits for a key press
/// instead (before the next attempt).
///
/// The prompt is erased and drawn again after this runs, since the cursor had to leave
/// the prompt line. Nothing is shown when the terminal isn't interactive.
pub struct StatusBarBehavior {
    duration: Duration,
    pending_restore: StdMutex<Option<JoinHandle<()>>>,
}

impl std::fmt::Debug for StatusBarBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusBarBehavior")
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

impl Default for StatusBarBehavior {
    fn default() -> Self { Self::new(DEFAULT_STATUS_BAR_DURATION) }
}

impl StatusBarBehavior {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            pending_restore: StdMutex::new(None),
        }
    }

    /// Keep the message up until a key is pressed.
    #[must_use]
    pub fn until_key_press() -> Self { Self::new(Duration::ZERO) }

    #[must_use]
    pub fn duration(&self) -> Duration { self.duration }

    /// Block until the last scheduled restore has run. Call this before the app exits,
    /// so the message doesn't stay on screen.
    pub fn wait_for_pending_restore(&self) {
        let maybe_handle = lock_or_recover(&self.pending_restore).take();
        if let Some(handle) = maybe_handle
            && handle.join().is_err()
        {
            tracing::warn!(message = "Status bar restore thread panicked");
        }
    }
}

impl NotificationBehavior for StatusBarBehavior {
    fn kind(&self) -> NotificationKind { NotificationKind::StatusBar }

    fn needs_reposition(&self) -> bool { true }

    fn notify(
        &self,
        context: &mut NotificationContext<'_>,
        message: &str,
    ) -> io::Result<bool> {
        let color = context.colors.error_color();

        // Draw the message on the last row, and put the cursor back.
        let (status_row, text_width) = {
            let mut renderer = lock_or_recover(context.renderer);
            if !renderer.is_interactive() {
                tracing::debug!(message = "Status bar skipped, terminal isn't interactive");
                return Ok(self.needs_reposition());
            }
            let size = renderer.size()?;
            let status_row = size.rows.saturating_sub(1);
            let (text, text_width) = fit_to_width(message, usize::from(size.cols));
            renderer.save_cursor()?;
            renderer.set_cursor(pos(0, status_row))?;
            renderer.write(&text, color)?;
            renderer.restore_cursor()?;
            (status_row, text_width)
        };

        if self.duration.is_zero() {
            context.reader.read_key()?;
            restore_status_row(context.renderer, status_row, text_width)?;
        } else {
            let renderer = Arc::clone(context.renderer);
            let duration = self.duration;
            let handle = thread::Builder::new()
                .name("status_bar_restore".into())
                .spawn(move || {
                    thread::sleep(duration);
                    if let Err(err) = restore_status_row(&renderer, status_row, text_width)
                    {
                        tracing::warn!(message = "Status bar restore failed", error = ?err);
                    }
                })?;
            // A previous restore that is still pending keeps running on its own.
            *lock_or_recover(&self.pending_restore) = Some(handle);
        }

        Ok(self.needs_reposition())
    }
}

/// Blanks `width` columns of `row`, and puts the cursor back where it is now.
///
/// This runs on the restore thread while the user may be typing, so the cursor is
/// saved and restored by the terminal itself. Asking for its position would make the
/// terminal reply on stdin, in the middle of the line being read.
fn restore_status_row(renderer: &SharedRenderer, row: u16, width: usize) -> io::Result<()> {
    let mut renderer = lock_or_recover(renderer);
    if !renderer.is_interactive() {
        return Ok(());
    }
    renderer.save_cursor()?;
    renderer.set_cursor(pos(0, row))?;
    renderer.write(&" ".repeat(width), Color::default())?;
    renderer.restore_cursor()
}

/// The status bar is a single row, so line breaks become spaces, and the text is
/// truncated to `max_width` columns. Returns the text and its display width.
fn fit_to_width(message: &str, max_width: usize) -> (String, usize) {
    let mut acc = String::new();
    let mut acc_width = 0;
    for ch in message.chars() {
        let ch = if ch == '\n' || ch == '\r' { ' ' } else { ch };
        let ch_width = ch.width().unwrap_or(0);
        if acc_width + ch_width > max_width {
            break;
        }
        acc.push(ch);
        acc_width += ch_width;
    }
    (acc, acc_width)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{DefaultColors, LineReaderMock, RendererMock, new_shared_renderer, size};

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("short", 80), ("short".to_string(), 5));
        assert_eq!(fit_to_width("truncate me", 8), ("truncate".to_string(), 8));
        assert_eq!(fit_to_width("a\nb", 80), ("a b".to_string(), 3));
        // Don't split a wide char.
        assert_eq!(fit_to_width("日本語", 5), ("日本".to_string(), 4));
    }

    #[test]
    fn test_shows_message_then_restores_after_duration() {
        let mock = RendererMock::new_interactive(size(20, 5)).with_cursor(pos(7, 1));
        let renderer = new_shared_renderer(mock.clone());
        let mut reader = LineReaderMock::default();
        let colors = DefaultColors::default();
        let behavior = StatusBarBehavior::new(Duration::from_millis(10));

        let mut context = NotificationContext {
            renderer: &renderer,
            reader: &mut reader,
            colors: &colors,
        };
        let needs_reposition = behavior.notify(&mut context, "value is way too long").unwrap();
        assert!(needs_reposition);
        assert_eq!(mock.cursor(), pos(7, 1));

        behavior.wait_for_pending_restore();
        assert_eq!(mock.screen_row(4), "");
        assert_eq!(mock.cursor(), pos(7, 1));
        assert!(mock.ops().contains(&crate::RenderOp::Write {
            text: "value is way too lon".into(),
            color: colors.error_color(),
        }));
    }

    #[test]
    fn test_zero_duration_waits_for_key() {
        let mock = RendererMock::new_interactive(size(40, 10));
        let renderer = new_shared_renderer(mock.clone());
        let reader_mock =
            LineReaderMock::default().with_keys([crossterm::event::KeyCode::Enter]);
        let mut reader = reader_mock.clone();
        let colors = DefaultColors::default();
        let behavior = StatusBarBehavior::until_key_press();

        let mut context = NotificationContext {
            renderer: &renderer,
            reader: &mut reader,
            colors: &colors,
        };
        behavior.notify(&mut context, "bad").unwrap();
        assert_eq!(reader_mock.keys_read(), 1);
        assert_eq!(mock.screen_row(9), "");
        assert_eq!(mock.cursor(), pos(0, 0));
    }

    #[test]
    fn test_redirected_terminal_is_skipped() {
        let mock = RendererMock::new_redirected();
        let renderer = new_shared_renderer(mock.clone());
        let mut reader = LineReaderMock::default();
        let colors = DefaultColors::default();
        let behavior = StatusBarBehavior::default();

        let mut context = NotificationContext {
            renderer: &renderer,
            reader: &mut reader,
            colors: &colors,
        };
        assert!(behavior.notify(&mut context, "bad").unwrap());
        assert!(mock.ops().is_empty());
        behavior.wait_for_pending_restore();
    }
}
