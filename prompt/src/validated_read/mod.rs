// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod prompt_buffer;
pub mod read_engine;
pub mod read_line_error;
pub mod read_request;
pub mod type_converter;
pub mod validation_rule;

#[cfg(test)]
mod integration_tests;

// Re-export.
pub use prompt_buffer::*;
pub use read_engine::*;
pub use read_line_error::*;
pub use read_request::*;
pub use type_converter::*;
pub use validation_rule::*;
