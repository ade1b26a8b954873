// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_prompt
//!
//! Validated, colorized line prompts for CLI apps.
//!
//! This crate reads a line of input from the terminal, converts it into a typed value,
//! validates it against an ordered list of rules, and if anything fails, it surfaces the
//! problem through a chain of pluggable notification behaviors and asks the question
//! again. The loop only ends when the user types something valid, or when the
//! fail-fast policy is turned on and the first invalid input aborts the read.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//! - [Quick start](#quick-start)
//! - [The read loop](#the-read-loop)
//! - [Asking a question](#asking-a-question)
//! - [Notification behaviors](#notification-behaviors)
//! - [Redirected streams](#redirected-streams)
//! - [Testing your prompts](#testing-your-prompts)
//! - [Logging](#logging)
//! <!-- /TOC -->
//!
//! # Quick start
//!
//! ```no_run
//! use r3bl_prompt::{Console, ReadRequest, ValidationRule, fg_blue};
//!
//! fn main() -> miette::Result<()> {
//!     let console = Console::default();
//!
//!     let name: String = console.read_line(
//!         ReadRequest::new([fg_blue("What's your name? ")]),
//!     )?;
//!
//!     let age: i32 = console.read_line(
//!         ReadRequest::plain(format!("What's your age, {name}? "))
//!             .rule(ValidationRule::min(18).with_message("You must be an adult")),
//!     )?;
//!
//!     console.write_line_plain(&format!("Hello {name}, age {age}"))?;
//!     Ok(())
//! }
//! ```
//!
//! # The read loop
//!
//! Each attempt goes through the same steps:
//!
//! 1. Write the prompt (after moving the cursor if a fixed position was requested).
//! 2. Read one raw line from the [`LineReader`].
//! 3. Convert it with a [`TypeConverter`]. A conversion failure is treated exactly like a
//!    validation failure.
//! 4. Run every [`ValidationRule`] in order. The failure message is the newline joined
//!    list of the messages of the rules that failed.
//! 5. On failure, invoke the [`NotificationChain`], then either return
//!    [`ReadLineError::FailFast`] (when [`ConsoleOptions::throw_on_invalid_input`] is set)
//!    or erase the region (when some behavior asked for it and the terminal is
//!    interactive), replay the [`PromptBuffer`] and try again.
//!
//! # Asking a question
//!
//! Anything written between [`Console::ask()`] and the next [`Console::read_line()`] is
//! recorded in the [`PromptBuffer`] and replayed verbatim before each retry. The
//! [`Choice`] component is built this way:
//!
//! ```no_run
//! use r3bl_prompt::{Choice, ColorSpan, Console};
//!
//! fn main() -> miette::Result<()> {
//!     let console = Console::default();
//!     let happy = Choice::new(&console, ColorSpan::new("Are you happy? "), "Yn")?
//!         .show_bool()?;
//!     console.write_line_plain(&format!("happy: {happy}"))?;
//!     Ok(())
//! }
//! ```
//!
//! # Notification behaviors
//!
//! | Behavior                  | Effect                                         | Reposition |
//! |---------------------------|------------------------------------------------|------------|
//! | [`StandardBehavior`]      | print the message on the line after the prompt | no         |
//! | [`WriteToStdErrBehavior`] | print the message to stderr                    | no         |
//! | [`BeepBehavior`]          | ring the terminal bell                         | no         |
//! | [`CustomBehavior`]        | call your closure                              | you decide |
//! | [`StatusBarBehavior`]     | flash the message on the last terminal row     | yes        |
//!
//! The chain always starts with [`StandardBehavior`], and it never holds two behaviors
//! of the same [`NotificationKind`].
//!
//! # Redirected streams
//!
//! When stdin or stdout is not a TTY (eg: `echo 42 | my_app`), the loop still works, but
//! it never tries to move the cursor to erase the previous attempt. The only operation
//! that fails outright is an explicit fixed position request ([`ReadRequest::at()`]),
//! which returns [`ReadLineError::RedirectedStream`].
//!
//! # Testing your prompts
//!
//! The [`test_fixtures`] module has a [`RendererMock`] that records every render op, a
//! [`LineReaderMock`] that replays scripted input, and a [`StdoutMock`] that captures
//! the bytes written to an [`OutputDevice`].
//!
//! # Logging
//!
//! The crate emits [`tracing`] events. Nothing is logged unless the app installs a
//! subscriber, eg: using [`try_initialize_logging_global()`]. Since stdout is where the
//! prompts go, the default [`TracingConfig`] writes to a file.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod components;
pub mod console;
pub mod log;
pub mod notification;
pub mod renderer;
pub mod style;
pub mod terminal_io;
pub mod test_fixtures;
pub mod validated_read;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use components::*;
pub use console::*;
pub use log::*;
pub use notification::*;
pub use renderer::*;
pub use style::*;
pub use terminal_io::*;
pub use test_fixtures::*;
pub use validated_read::*;

/// Short for `Ok(())` or `Ok(value)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
