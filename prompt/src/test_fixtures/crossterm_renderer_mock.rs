// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CrosstermRenderer, OutputDevice, StdoutMock};

/// A real [`CrosstermRenderer`] whose output and error devices are both mocks, so the
/// exact bytes (escape sequences included) sent to each stream can be asserted on.
///
/// Since there is no terminal behind the mocks, the renderer is never interactive, and
/// every cursor op fails the same way it does when stdout is redirected.
#[allow(missing_debug_implementations)]
pub struct CrosstermRendererMock {
    pub renderer: CrosstermRenderer,
    pub stdout_mock: StdoutMock,
    pub stderr_mock: StdoutMock,
}

impl Default for CrosstermRendererMock {
    fn default() -> Self { Self::new() }
}

impl CrosstermRendererMock {
    #[must_use]
    pub fn new() -> Self {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let (error_device, stderr_mock) = OutputDevice::new_mock();
        Self {
            renderer: CrosstermRenderer::new(output_device, error_device, true),
            stdout_mock,
            stderr_mock,
        }
    }

    /// Visible text written to stdout so far.
    #[must_use]
    pub fn stdout_text(&self) -> String {
        self.stdout_mock.get_copy_of_buffer_as_string_strip_ansi()
    }

    /// Visible text written to stderr so far.
    #[must_use]
    pub fn stderr_text(&self) -> String {
        self.stderr_mock.get_copy_of_buffer_as_string_strip_ansi()
    }
}
