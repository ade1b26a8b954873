// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque, io, sync::Arc};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{LineReader, StdMutex, lock_or_recover};

/// A [`LineReader`] that replays a scripted list of lines (and key presses). When the
/// script runs out, it reports EOF.
///
/// Cloning is cheap and every clone shares the same script, so a test can keep a clone
/// to inspect how much input was consumed after the reader is moved into a
/// [`Console`](crate::Console).
#[derive(Clone, Default, Debug)]
pub struct LineReaderMock {
    pub state: Arc<StdMutex<LineReaderMockState>>,
}

#[derive(Default, Debug)]
pub struct LineReaderMockState {
    pub lines: VecDeque<String>,
    pub keys: VecDeque<KeyEvent>,
    pub lines_read: usize,
    pub keys_read: usize,
}

impl LineReaderMock {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        let this = Self::default();
        lock_or_recover(&this.state).lines = lines.into_iter().map(Into::into).collect();
        this
    }

    /// Script the key presses returned by [`LineReader::read_key()`].
    #[must_use]
    pub fn with_keys(self, keys: impl IntoIterator<Item = KeyCode>) -> Self {
        lock_or_recover(&self.state).keys = keys
            .into_iter()
            .map(|code| KeyEvent::new(code, KeyModifiers::NONE))
            .collect();
        self
    }

    pub fn push_line(&self, line: impl Into<String>) {
        lock_or_recover(&self.state).lines.push_back(line.into());
    }

    #[must_use]
    pub fn lines_read(&self) -> usize { lock_or_recover(&self.state).lines_read }

    #[must_use]
    pub fn keys_read(&self) -> usize { lock_or_recover(&self.state).keys_read }

    #[must_use]
    pub fn remaining_lines(&self) -> usize { lock_or_recover(&self.state).lines.len() }
}

impl LineReader for LineReaderMock {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut state = lock_or_recover(&self.state);
        let maybe_line = state.lines.pop_front();
        if maybe_line.is_some() {
            state.lines_read += 1;
        }
        Ok(maybe_line)
    }

    fn read_key(&mut self) -> io::Result<Option<KeyEvent>> {
        let mut state = lock_or_recover(&self.state);
        let maybe_key = state.keys.pop_front();
        if maybe_key.is_some() {
            state.keys_read += 1;
        }
        Ok(maybe_key)
    }
}
