// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod console_impl;
pub mod console_options;

// Re-export.
pub use console_impl::*;
pub use console_options::*;
