// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use crate::{SafeRawTerminal, SendRawTerminal, StdMutex, StdoutMock, lock_or_recover};

pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// Macro to simplify locking and getting a mutable reference to the output device.
/// Don't call this again in the same scope, it will deadlock! A safe approach is
/// to use this macro in a separate block scope.
///
/// Usage example:
/// ```
/// use r3bl_prompt::{lock_output_device_as_mut, OutputDevice, LockedOutputDevice};
/// let device = OutputDevice::new_stdout();
/// { // Start a new block scope to avoid deadlock.
///     let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = mut_ref.write_all(b"Hello, world!\n");
/// } // The lock is released here.
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// This struct represents an output device that the renderer writes to.
/// - It is safe to clone.
/// - To write to it, see [`Self::lock()`] or the [`lock_output_device_as_mut`] macro.
/// - `is_mock` is `true` when the bytes go to a
///   [`StdoutMock`](crate::StdoutMock), in which case there is no real terminal behind
///   it (no cursor position, no size).
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stderr())),
            is_mock: false,
        }
    }

    /// A device that captures everything written to it in the returned [`StdoutMock`].
    /// Renderers treat it as a redirected stream.
    #[must_use]
    pub fn new_mock() -> (Self, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let this = Self {
            resource: Arc::new(StdMutex::new(stdout_mock.clone())),
            is_mock: true,
        };
        (this, stdout_mock)
    }

    /// Locks the output device for writing. A poisoned lock is recovered, since a
    /// partially written line is still a valid state for a terminal.
    ///
    /// ```
    /// use r3bl_prompt::{OutputDevice, LockedOutputDevice};
    ///
    /// let device = OutputDevice::new_stdout();
    /// let mut_ref: LockedOutputDevice<'_> = &mut *device.lock();
    /// let _ = mut_ref.write_all(b"Hello, world!\n");
    /// ```
    pub fn lock(&self) -> std::sync::MutexGuard<'_, SendRawTerminal> {
        lock_or_recover(&self.resource)
    }
}
