// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Color, ConsoleColor};

/// The palette used by the console itself (notifications, highlighted choices, etc).
/// Part of [`ConsoleOptions`](crate::ConsoleOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultColors {
    pub error: ConsoleColor,
    pub warn: ConsoleColor,
    pub info: ConsoleColor,
    pub highlight: ConsoleColor,
    /// Colors for plain text. `None` leaves the terminal's own colors alone.
    pub foreground: Option<ConsoleColor>,
    pub background: Option<ConsoleColor>,
}

impl Default for DefaultColors {
    fn default() -> Self {
        Self {
            error: ConsoleColor::DarkRed,
            warn: ConsoleColor::Yellow,
            info: ConsoleColor::Blue,
            highlight: ConsoleColor::White,
            foreground: None,
            background: None,
        }
    }
}

impl DefaultColors {
    #[must_use]
    pub const fn plain_color(&self) -> Color { Color::new(self.foreground, self.background) }

    #[must_use]
    pub const fn error_color(&self) -> Color { Color::fg(self.error) }

    #[must_use]
    pub const fn warn_color(&self) -> Color { Color::fg(self.warn) }

    #[must_use]
    pub const fn info_color(&self) -> Color { Color::fg(self.info) }

    #[must_use]
    pub const fn highlight_color(&self) -> Color { Color::fg(self.highlight) }
}
