// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

/// Why a raw line was rejected. Both variants are recovered by the read loop (the user
/// is asked again), unless fail-fast is on, in which case they are returned wrapped in
/// [`ReadLineError::FailFast`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum InvalidInput {
    /// The raw text can't be parsed into the target type.
    #[error("{message}")]
    #[diagnostic(code(r3bl_prompt::invalid_input::conversion))]
    Conversion { raw: String, message: String },

    /// One or more rules rejected the converted value. The message is the newline
    /// joined list of the messages of the failing rules.
    #[error("{message}")]
    #[diagnostic(code(r3bl_prompt::invalid_input::validation))]
    Validation { message: String },
}

impl InvalidInput {
    /// The text that is handed to every notification behavior.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            InvalidInput::Conversion { message, .. }
            | InvalidInput::Validation { message } => message,
        }
    }
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ReadLineError {
    #[error("Invalid input: {0}")]
    #[diagnostic(
        code(r3bl_prompt::read_line::fail_fast),
        help("Set `throw_on_invalid_input(false)` on the console options to ask again instead")
    )]
    FailFast(#[source] InvalidInput),

    #[error("Can't set cursor position on redirected stream")]
    #[diagnostic(
        code(r3bl_prompt::read_line::redirected_stream),
        help("Fixed position prompts need stdin and stdout to be attached to a terminal")
    )]
    RedirectedStream,

    #[error("Input closed before a valid line was read")]
    #[diagnostic(code(r3bl_prompt::read_line::input_closed))]
    InputClosed,

    #[error("Terminal I/O failed: {0}")]
    #[diagnostic(code(r3bl_prompt::read_line::io))]
    Io(#[from] io::Error),
}

impl ReadLineError {
    /// The rejected input, if this error is a fail-fast abort.
    #[must_use]
    pub fn invalid_input(&self) -> Option<&InvalidInput> {
        match self {
            ReadLineError::FailFast(invalid_input) => Some(invalid_input),
            _ => None,
        }
    }
}
