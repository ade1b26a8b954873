// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ConsoleColor;

/// A foreground / background pair. `None` means "leave the terminal's current color
/// alone" for that layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub fg: Option<ConsoleColor>,
    pub bg: Option<ConsoleColor>,
}

impl Color {
    #[must_use]
    pub const fn new(fg: Option<ConsoleColor>, bg: Option<ConsoleColor>) -> Self {
        Self { fg, bg }
    }

    #[must_use]
    pub const fn fg(fg: ConsoleColor) -> Self { Self::new(Some(fg), None) }

    #[must_use]
    pub const fn bg(bg: ConsoleColor) -> Self { Self::new(None, Some(bg)) }

    /// Replace the background, eg: `Color::fg(ConsoleColor::White).on(ConsoleColor::Red)`.
    #[must_use]
    pub const fn on(mut self, bg: ConsoleColor) -> Self {
        self.bg = Some(bg);
        self
    }

    /// `true` if neither layer is set, which means the text is written without any
    /// color escape sequences.
    #[must_use]
    pub const fn is_default(&self) -> bool { self.fg.is_none() && self.bg.is_none() }
}

impl From<ConsoleColor> for Color {
    fn from(fg: ConsoleColor) -> Self { Self::fg(fg) }
}
