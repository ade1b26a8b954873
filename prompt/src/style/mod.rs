// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod color;
pub mod color_span;
pub mod console_color;
pub mod default_colors;

// Re-export.
pub use color::*;
pub use color_span::*;
pub use console_color::*;
pub use default_colors::*;
