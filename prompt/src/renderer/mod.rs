// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod crossterm_renderer;
pub mod renderer_api;

// Re-export.
pub use crossterm_renderer::*;
pub use renderer_api::*;
