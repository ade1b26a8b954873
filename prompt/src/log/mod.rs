// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **DISABLED** by **default**. The read loop, the notification chain and
//! the prompt buffer emit [`tracing`] events, which go nowhere until the app calls
//! [`try_initialize_logging_global()`] or [`try_initialize_logging_thread_local()`].
//!
//! Since stdout is where the prompts are drawn, logs go to a file by default
//! ([`DEFAULT_LOG_FILE_NAME`]).

// Attach sources.
pub mod log_public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use log_public_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
