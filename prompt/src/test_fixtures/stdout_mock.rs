// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Result, Write},
          sync::Arc};

use strip_ansi_escapes::strip;

use crate::{StdMutex, lock_or_recover};

/// You can safely clone this struct, since it only contains an `Arc<StdMutex<Vec<u8>>>`.
/// The inner `buffer` will not be cloned, just the [Arc] will be cloned.
///
/// The main constructors are:
/// - [`StdoutMock::default`]
/// - [`StdoutMock::new`]
/// - [`OutputDevice::new_mock()`](crate::OutputDevice::new_mock)
#[derive(Clone, Default)]
#[allow(missing_debug_implementations)]
pub struct StdoutMock {
    pub buffer: Arc<StdMutex<Vec<u8>>>,
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { lock_or_recover(&self.buffer).clone() }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        let buffer_data = lock_or_recover(&self.buffer);
        String::from_utf8_lossy(&buffer_data).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let buffer_data = strip(&*lock_or_recover(&self.buffer));
        String::from_utf8_lossy(&buffer_data).into_owned()
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        lock_or_recover(&self.buffer).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
