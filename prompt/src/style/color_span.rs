// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use smallvec::SmallVec;
use unicode_width::UnicodeWidthStr;

use crate::{Color, ConsoleColor};

/// A piece of text that is written in a single [`Color`]. A prompt is a sequence of these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ColorSpan {
    pub text: String,
    pub color: Color,
}

/// Most prompts are made of a handful of spans, so they live on the stack.
pub type ColorSpans = SmallVec<[ColorSpan; 4]>;

impl ColorSpan {
    /// A span in the terminal's current colors.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Color::default(),
        }
    }

    pub fn colored(text: impl Into<String>, color: impl Into<Color>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }

    #[must_use]
    pub fn fg(mut self, fg: ConsoleColor) -> Self {
        self.color.fg = Some(fg);
        self
    }

    #[must_use]
    pub fn bg(mut self, bg: ConsoleColor) -> Self {
        self.color.bg = Some(bg);
        self
    }

    /// Display width of the text in terminal columns (not bytes, not chars).
    #[must_use]
    pub fn display_width(&self) -> usize { self.text.width() }
}

impl Display for ColorSpan {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.text) }
}

/// Sum of the display widths of all the spans.
pub fn spans_display_width<'a>(spans: impl IntoIterator<Item = &'a ColorSpan>) -> usize {
    spans.into_iter().map(ColorSpan::display_width).sum()
}

macro_rules! generate_fg_helpers {
    ($($fn_name:ident => $color:ident),* $(,)?) => {
        $(
            #[doc = concat!("Shorthand for a span with a `", stringify!($color), "` foreground.")]
            pub fn $fn_name(text: impl Into<String>) -> ColorSpan {
                ColorSpan::colored(text, ConsoleColor::$color)
            }
        )*
    };
}

generate_fg_helpers! {
    fg_black => Black,
    fg_dark_blue => DarkBlue,
    fg_dark_green => DarkGreen,
    fg_dark_cyan => DarkCyan,
    fg_dark_red => DarkRed,
    fg_dark_magenta => DarkMagenta,
    fg_dark_yellow => DarkYellow,
    fg_gray => Gray,
    fg_dark_gray => DarkGray,
    fg_blue => Blue,
    fg_green => Green,
    fg_cyan => Cyan,
    fg_red => Red,
    fg_magenta => Magenta,
    fg_yellow => Yellow,
    fg_white => White,
}
