// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod beep;
pub mod custom;
pub mod notification_behavior;
pub mod notification_chain;
pub mod standard;
pub mod status_bar;
pub mod write_to_std_err;

// Re-export.
pub use beep::*;
pub use custom::*;
pub use notification_behavior::*;
pub use notification_chain::*;
pub use standard::*;
pub use status_bar::*;
pub use write_to_std_err::*;
