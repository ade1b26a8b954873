// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// The classic 16 color console palette. These map onto the basic ANSI colors, so they
/// render on every terminal, including the ones that don't support truecolor or the 256
/// color palette.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl From<ConsoleColor> for crossterm::style::Color {
    fn from(color: ConsoleColor) -> Self {
        use crossterm::style::Color as CtColor;
        match color {
            ConsoleColor::Black => CtColor::Black,
            ConsoleColor::DarkBlue => CtColor::DarkBlue,
            ConsoleColor::DarkGreen => CtColor::DarkGreen,
            ConsoleColor::DarkCyan => CtColor::DarkCyan,
            ConsoleColor::DarkRed => CtColor::DarkRed,
            ConsoleColor::DarkMagenta => CtColor::DarkMagenta,
            ConsoleColor::DarkYellow => CtColor::DarkYellow,
            ConsoleColor::Gray => CtColor::Grey,
            ConsoleColor::DarkGray => CtColor::DarkGrey,
            ConsoleColor::Blue => CtColor::Blue,
            ConsoleColor::Green => CtColor::Green,
            ConsoleColor::Cyan => CtColor::Cyan,
            ConsoleColor::Red => CtColor::Red,
            ConsoleColor::Magenta => CtColor::Magenta,
            ConsoleColor::Yellow => CtColor::Yellow,
            ConsoleColor::White => CtColor::White,
        }
    }
}
