// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, MutexGuard, PoisonError};

/// Disambiguate the type of `StdMutex` from other mutex implementations.
pub type StdMutex<T> = std::sync::Mutex<T>;

/// Type alias for a `Send`-able output device (stdout, stderr, mock, etc).
pub type SendRawTerminal = dyn std::io::Write + Send;
/// Type alias for a `Send`-able raw terminal wrapped in an `Arc<StdMutex>`.
pub type SafeRawTerminal = Arc<StdMutex<SendRawTerminal>>;

/// Lock a [`StdMutex`], recovering the guard if another thread panicked while holding
/// it. The data guarded by the mutexes in this crate (render state, prompt buffer,
/// options) stays consistent across a panic, so the console remains usable.
pub fn lock_or_recover<T: ?Sized>(mutex: &StdMutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
