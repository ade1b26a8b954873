// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;

use crate::{TracingConfig, ok};

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Configure this with anything that converts [`Into<TracingConfig>`], eg:
///   [`tracing::Level::DEBUG`], or a [`WriterConfig`](crate::WriterConfig).
///
/// Logging is **DISABLED** by **default**. If you don't call this function with a value
/// other than [`tracing_core::LevelFilter::OFF`], then logging won't be enabled.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, so different threads (eg: different tests) can log to
/// different places. Logging stops when the returned guard is dropped.
///
/// Returns `Ok(None)` if the level filter is [`tracing_core::LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
