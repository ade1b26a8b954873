// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Mocks for the terminal and for user input, so that prompts can be tested without a
//! TTY. These are part of the public API so that apps that use this crate can test their
//! own prompts the same way.

// Attach sources.
pub mod crossterm_renderer_mock;
pub mod line_reader_mock;
pub mod renderer_mock;
pub mod stdout_mock;

// Re-export.
pub use crossterm_renderer_mock::*;
pub use line_reader_mock::*;
pub use renderer_mock::*;
pub use stdout_mock::*;
