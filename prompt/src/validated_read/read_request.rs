// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Display, str::FromStr};

use crate::{Color, ColorSpan, ColorSpans, InvalidInput, Pos, TypeConverter,
            ValidationRule, ValidationRules, Validity, pos, spans_display_width};

/// Everything needed for one validated read: the prompt, how to convert the raw line,
/// the rules the value must pass, and optionally a fixed position and an input color.
///
/// It is built with consuming builder methods and then handed to
/// [`Console::read_line()`](crate::Console::read_line), which only reads from it.
///
/// ```
/// use r3bl_prompt::{ReadRequest, ValidationRule, fg_blue};
///
/// let request: ReadRequest<i32> = ReadRequest::new([fg_blue("Age: ")])
///     .rule(ValidationRule::range(0, 130))
///     .at(0, 5);
/// assert_eq!(request.rules().len(), 1);
/// ```
#[derive(Debug)]
pub struct ReadRequest<T> {
    prompt: ColorSpans,
    converter: TypeConverter<T>,
    rules: ValidationRules<T>,
    position: Option<Pos>,
    input_color: Option<Color>,
}

impl<T> ReadRequest<T>
where
    T: FromStr + 'static,
    T::Err: Display,
{
    /// Converts with [`TypeConverter::parse()`].
    pub fn new(prompt: impl IntoIterator<Item = ColorSpan>) -> Self {
        Self::with_converter(prompt, TypeConverter::parse())
    }

    /// A prompt in the terminal's current colors.
    pub fn plain(prompt: impl Into<String>) -> Self { Self::new([ColorSpan::new(prompt)]) }

    /// No prompt at all, eg: when the question was already written after
    /// [`Console::ask()`](crate::Console::ask).
    #[must_use]
    pub fn without_prompt() -> Self { Self::new([]) }
}

impl<T: 'static> ReadRequest<T> {
    pub fn with_converter(
        prompt: impl IntoIterator<Item = ColorSpan>,
        converter: TypeConverter<T>,
    ) -> Self {
        Self {
            prompt: prompt.into_iter().collect(),
            converter,
            rules: ValidationRules::default(),
            position: None,
            input_color: None,
        }
    }

    /// Append a rule. Rules are evaluated in the order they are added.
    #[must_use]
    pub fn rule(mut self, rule: ValidationRule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append all the `rules`.
    #[must_use]
    pub fn rules_from(mut self, rules: impl IntoIterator<Item = ValidationRule<T>>) -> Self {
        for rule in rules {
            self.rules.push(rule);
        }
        self
    }

    /// Move the cursor to `(x, y)` before every attempt. Reading fails with
    /// [`ReadLineError::RedirectedStream`](crate::ReadLineError::RedirectedStream) if the
    /// terminal isn't interactive.
    #[must_use]
    pub fn at(mut self, x: u16, y: u16) -> Self {
        self.position = Some(pos(x, y));
        self
    }

    /// The color that the user's typed text is echoed in.
    #[must_use]
    pub fn input_color(mut self, color: impl Into<Color>) -> Self {
        self.input_color = Some(color.into());
        self
    }

    /// Convert `raw` and run every rule on the result. A conversion failure and a rule
    /// failure are both reported as [`InvalidInput`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if `raw` is rejected.
    pub fn evaluate(&self, raw: &str) -> Result<T, InvalidInput> {
        let value = self.converter.convert(raw)?;
        match self.rules.evaluate(&value) {
            Validity::Valid => Ok(value),
            Validity::Invalid(message) => Err(InvalidInput::Validation { message }),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &[ColorSpan] { &self.prompt }

    #[must_use]
    pub fn prompt_display_width(&self) -> usize { spans_display_width(&self.prompt) }

    #[must_use]
    pub fn converter(&self) -> &TypeConverter<T> { &self.converter }

    #[must_use]
    pub fn rules(&self) -> &ValidationRules<T> { &self.rules }

    #[must_use]
    pub fn position(&self) -> Option<Pos> { self.position }

    #[must_use]
    pub fn get_input_color(&self) -> Option<Color> { self.input_color }
}
