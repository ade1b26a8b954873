// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Color, ColorSpan, Console, ReadRequest, ValidationRule};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ChoiceError {
    #[error("At least 2 choices are needed, got {count}")]
    #[diagnostic(
        code(r3bl_prompt::choice::too_few_choices),
        help("Pass the choices as one letter each, eg: \"Yn\" or \"yNc\"")
    )]
    TooFewChoices { count: usize },

    #[error("Default index {index} is out of range for {len} choices")]
    #[diagnostic(code(r3bl_prompt::choice::default_index_out_of_range))]
    DefaultIndexOutOfRange { index: usize, len: usize },
}

/// The choices of a [`Choice`] prompt, and which one (if any) is picked on an empty
/// line. The default choice is shown in upper case, the others in lower case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOptions {
    choices: Vec<String>,
    default_index: Option<usize>,
}

impl Default for ChoiceOptions {
    fn default() -> Self {
        Self {
            choices: vec!["Y".into(), "n".into()],
            default_index: Some(0),
        }
    }
}

impl ChoiceOptions {
    /// One choice per char of `choices`. The last upper case char is the default, eg:
    /// `"yNc"` has `N` as the default. If there is none, the first choice is the default,
    /// eg: `"abc"` becomes `[A/b/c]`. Use [`Self::set_default_index()`] with `None` to
    /// have no default at all.
    ///
    /// # Errors
    ///
    /// Returns [`ChoiceError::TooFewChoices`] if `choices` has fewer than 2 chars.
    pub fn new(choices: &str) -> Result<Self, ChoiceError> {
        let chars: Vec<char> = choices.chars().collect();
        if chars.len() < 2 {
            return Err(ChoiceError::TooFewChoices { count: chars.len() });
        }
        let default_index = chars.iter().rposition(|it| it.is_uppercase()).unwrap_or(0);
        let mut this = Self {
            choices: chars.iter().map(ToString::to_string).collect(),
            default_index: None,
        };
        this.set_default_index(Some(default_index))?;
        Ok(this)
    }

    /// `None` removes the default. The choices are re-cased to match.
    ///
    /// # Errors
    ///
    /// Returns [`ChoiceError::DefaultIndexOutOfRange`] if `index` isn't a valid choice.
    pub fn set_default_index(&mut self, index: Option<usize>) -> Result<(), ChoiceError> {
        if let Some(index) = index
            && index >= self.choices.len()
        {
            return Err(ChoiceError::DefaultIndexOutOfRange {
                index,
                len: self.choices.len(),
            });
        }
        self.default_index = index;
        for (choice_index, choice) in self.choices.iter_mut().enumerate() {
            *choice = if Some(choice_index) == index {
                choice.to_uppercase()
            } else {
                choice.to_lowercase()
            };
        }
        Ok(())
    }

    #[must_use]
    pub fn choices(&self) -> &[String] { &self.choices }

    #[must_use]
    pub fn default_index(&self) -> Option<usize> { self.default_index }

    /// Index of the choice that `input` picks, in any case (not just ASCII, eg: `ñ`
    /// picks `Ñ`). An empty line picks the default.
    #[must_use]
    pub fn resolve(&self, input: &str) -> Option<usize> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return self.default_index;
        }
        self.choices
            .iter()
            .position(|choice| choice.to_lowercase() == input)
    }
}

/// A question followed by its choices, eg: `Are you happy? [Y/n] `. The user can type
/// any of the choices (in any case), or just press Enter to pick the default.
///
/// ```
/// use r3bl_prompt::{Choice, ColorSpan, Console, LineReaderMock, RendererMock};
///
/// let console = Console::new(RendererMock::default(), LineReaderMock::new(["", "N"]));
/// let choice = Choice::new(&console, ColorSpan::new("Continue? "), "Yn").unwrap();
/// assert!(choice.show_bool().unwrap());
/// assert!(!choice.show_bool().unwrap());
/// ```
#[derive(Debug)]
pub struct Choice<'a> {
    console: &'a Console,
    text: ColorSpan,
    options: ChoiceOptions,
}

impl<'a> Choice<'a> {
    /// # Errors
    ///
    /// See [`ChoiceOptions::new()`].
    pub fn new(
        console: &'a Console,
        text: ColorSpan,
        choices: &str,
    ) -> Result<Self, ChoiceError> {
        Ok(Self::with_options(console, text, ChoiceOptions::new(choices)?))
    }

    #[must_use]
    pub fn with_options(console: &'a Console, text: ColorSpan, options: ChoiceOptions) -> Self {
        Self {
            console,
            text,
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> &ChoiceOptions { &self.options }

    /// The `[Y/n] ` part, with the default in the highlight color.
    #[must_use]
    pub fn choice_spans(&self) -> Vec<ColorSpan> {
        let colors = self.console.options().colors;
        let mut acc = vec![ColorSpan::new("[")];
        for (index, choice) in self.options.choices.iter().enumerate() {
            if index > 0 {
                acc.push(ColorSpan::new("/"));
            }
            let color = if Some(index) == self.options.default_index {
                colors.highlight_color()
            } else {
                Color::default()
            };
            acc.push(ColorSpan::colored(choice.clone(), color));
        }
        acc.push(ColorSpan::new("] "));
        acc
    }

    /// Ask until one of the choices is picked, and return it (as it is shown, eg: `"Y"`
    /// or `"n"`).
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be used, or any
    /// [`ReadLineError`](crate::ReadLineError), eg: when fail-fast is on and the input
    /// isn't one of the choices.
    pub fn show(&self) -> miette::Result<String> {
        let index = self.show_index()?;
        Ok(self.options.choices[index].clone())
    }

    /// `true` if the first choice is picked.
    ///
    /// # Errors
    ///
    /// See [`Self::show()`].
    pub fn show_bool(&self) -> miette::Result<bool> { Ok(self.show_index()? == 0) }

    /// `1` if the first choice is picked, `0` otherwise. Same as [`Self::show_bool()`],
    /// for apps that store the answer as a number.
    ///
    /// # Errors
    ///
    /// See [`Self::show()`].
    pub fn show_int(&self) -> miette::Result<i32> {
        Ok(i32::from(self.show_bool()?))
    }

    /// Index of the picked choice in [`ChoiceOptions::choices()`].
    ///
    /// # Errors
    ///
    /// See [`Self::show()`].
    pub fn show_index(&self) -> miette::Result<usize> {
        self.console
            .ask()
            .write(&self.text)?
            .write_spans(&self.choice_spans())?;

        let options = self.options.clone();
        let message = format!(
            "Please type one of: {}",
            self.options.choices.join(", ")
        );
        let raw: String = self.console.read_line(
            ReadRequest::without_prompt().rule(ValidationRule::predicate(
                message,
                move |input: &String| options.resolve(input).is_some(),
            )),
        )?;

        self.options
            .resolve(&raw)
            .ok_or_else(|| miette::miette!("'{raw}' is not one of the choices"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{ConsoleOptions, LineReaderMock, ReadLineError, RendererMock};

    fn mock_console(lines: &[&str]) -> (Console, RendererMock) {
        let renderer = RendererMock::default();
        let console = Console::new(renderer.clone(), LineReaderMock::new(lines.iter().copied()));
        (console, renderer)
    }

    #[test_case("Yn", &["Y", "n"], Some(0) ; "default first")]
    #[test_case("yN", &["y", "N"], Some(1) ; "default last")]
    #[test_case("YnC", &["y", "n", "C"], Some(2) ; "last upper case wins")]
    #[test_case("abc", &["A", "b", "c"], Some(0) ; "first is default when none is upper case")]
    #[test_case("abCdEf", &["a", "b", "c", "d", "E", "f"], Some(4) ; "latest upper case")]
    fn test_parse_choices(raw: &str, choices: &[&str], default_index: Option<usize>) {
        let options = ChoiceOptions::new(raw).unwrap();
        assert_eq!(options.choices(), choices);
        assert_eq!(options.default_index(), default_index);
    }

    #[test_case("" ; "empty")]
    #[test_case("Y" ; "single")]
    fn test_too_few_choices(raw: &str) {
        assert!(matches!(
            ChoiceOptions::new(raw),
            Err(ChoiceError::TooFewChoices { .. })
        ));
    }

    #[test]
    fn test_set_default_index_recases() {
        let mut options = ChoiceOptions::default();
        options.set_default_index(Some(1)).unwrap();
        assert_eq!(options.choices(), &["y", "N"]);
        options.set_default_index(None).unwrap();
        assert_eq!(options.choices(), &["y", "n"]);
        assert_eq!(
            options.set_default_index(Some(2)),
            Err(ChoiceError::DefaultIndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test_case("", Some(0))]
    #[test_case("y", Some(0))]
    #[test_case(" N ", Some(1))]
    #[test_case("maybe", None)]
    fn test_resolve(input: &str, expected: Option<usize>) {
        assert_eq!(ChoiceOptions::default().resolve(input), expected);
    }

    #[test]
    fn test_show_returns_canonical_choice() {
        let (console, renderer) = mock_console(&["y"]);
        let choice = Choice::new(&console, ColorSpan::new("Happy? "), "Yn").unwrap();
        assert_eq!(choice.show().unwrap(), "Y");
        assert_eq!(renderer.screen_lines(), vec!["Happy? [Y/n] y"]);
    }

    #[test]
    fn test_show_bool() {
        let (console, _) = mock_console(&["y", "n", ""]);
        let choice = Choice::new(&console, ColorSpan::new("Happy? "), "yN").unwrap();
        assert!(choice.show_bool().unwrap());
        assert!(!choice.show_bool().unwrap());
        // Empty line picks the default, which is "N".
        assert!(!choice.show_bool().unwrap());
    }

    #[test]
    fn test_invalid_choice_asks_again() {
        let (console, renderer) = mock_console(&["maybe", "n"]);
        let choice = Choice::new(&console, ColorSpan::new("Happy? "), "Yn").unwrap();
        assert_eq!(choice.show().unwrap(), "n");
        assert_eq!(
            renderer.screen_lines(),
            vec![
                "Happy? [Y/n] maybe",
                "Please type one of: Y, n",
                "Happy? [Y/n] n",
            ]
        );
    }

    #[test]
    fn test_empty_line_picks_first_when_none_is_upper_case() {
        let (console, renderer) = mock_console(&[""]);
        let choice = Choice::new(&console, ColorSpan::new("Pick "), "abc").unwrap();
        assert_eq!(choice.show().unwrap(), "A");
        assert_eq!(renderer.screen_lines(), vec!["Pick [A/b/c]"]);
    }

    #[test]
    fn test_empty_line_without_default_is_rejected() {
        let (console, _) = mock_console(&["", "b"]);
        let mut options = ChoiceOptions::new("abc").unwrap();
        options.set_default_index(None).unwrap();
        let choice = Choice::with_options(&console, ColorSpan::new("Pick "), options);
        assert_eq!(choice.show().unwrap(), "b");
    }

    #[test_case("y", 1 ; "first choice")]
    #[test_case("", 1 ; "default is first choice")]
    #[test_case("N", 0 ; "second choice")]
    fn test_show_int(input: &str, expected: i32) {
        let (console, _) = mock_console(&[input]);
        let choice = Choice::new(&console, ColorSpan::new("Happy? "), "Yn").unwrap();
        assert_eq!(choice.show_int().unwrap(), expected);
    }

    #[test]
    fn test_show_index() {
        let (console, _) = mock_console(&["c"]);
        let choice = Choice::new(&console, ColorSpan::new("Pick "), "aBc").unwrap();
        assert_eq!(choice.show_index().unwrap(), 2);
    }

    #[test]
    fn test_resolve_is_not_limited_to_ascii() {
        let options = ChoiceOptions::new("sÑ").unwrap();
        assert_eq!(options.choices(), &["s", "Ñ"]);
        assert_eq!(options.resolve("ñ"), Some(1));
        assert_eq!(options.resolve("Ñ"), Some(1));
    }

    #[test]
    fn test_fail_fast() {
        let (console, _) = mock_console(&["maybe", "y"]);
        console.configure(ConsoleOptions::default().throw_on_invalid_input(true));
        let choice = Choice::new(&console, ColorSpan::new("Happy? "), "Yn").unwrap();
        let report = choice.show().unwrap_err();
        assert!(matches!(
            report.downcast_ref::<ReadLineError>(),
            Some(ReadLineError::FailFast(_))
        ));
    }
}
