// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Display};

/// The result of checking a converted value against a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid(String),
}

impl Validity {
    pub fn from_bool(is_valid: bool, message: impl Into<String>) -> Self {
        if is_valid {
            Validity::Valid
        } else {
            Validity::Invalid(message.into())
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool { matches!(self, Validity::Valid) }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(message) => Some(message),
        }
    }
}

pub const DEFAULT_INVALID_MESSAGE: &str = "Invalid value";

type CheckFn<T> = Box<dyn Fn(&T) -> Validity>;

/// A single check on a converted value. Rules are stateless, and they come in three
/// flavors which all end up as the same `&T -> Validity` function:
///
/// 1. Built-ins, eg: [`Self::range()`], [`Self::min_length()`], [`Self::one_of()`], with
///    a default message that can be replaced with [`Self::with_message()`].
/// 2. A boolean predicate and a message: [`Self::predicate()`], or [`Self::check()`].
/// 3. A function that returns a [`Validity`] itself: [`Self::new()`].
///
/// ```
/// use r3bl_prompt::{ValidationRule, ValidationRules, Validity};
///
/// let rules = ValidationRules::from(vec![
///     ValidationRule::min(18).with_message("You must be an adult"),
///     ValidationRule::predicate("Must be even", |age: &i32| age % 2 == 0),
/// ]);
/// assert_eq!(
///     rules.evaluate(&15),
///     Validity::Invalid("You must be an adult\nMust be even".into())
/// );
/// assert!(rules.evaluate(&20).is_valid());
/// ```
pub struct ValidationRule<T> {
    check_fn: CheckFn<T>,
    message_override: Option<String>,
}

impl<T> Debug for ValidationRule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationRule")
            .field("message_override", &self.message_override)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> ValidationRule<T> {
    pub fn new(check_fn: impl Fn(&T) -> Validity + 'static) -> Self {
        Self {
            check_fn: Box::new(check_fn),
            message_override: None,
        }
    }

    pub fn predicate(
        message: impl Into<String>,
        predicate: impl Fn(&T) -> bool + 'static,
    ) -> Self {
        let message = message.into();
        Self::new(move |value| Validity::from_bool(predicate(value), message.clone()))
    }

    /// A predicate with the generic [`DEFAULT_INVALID_MESSAGE`].
    pub fn check(predicate: impl Fn(&T) -> bool + 'static) -> Self {
        Self::predicate(DEFAULT_INVALID_MESSAGE, predicate)
    }

    /// Replace the message that is reported when this rule fails.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message_override = Some(message.into());
        self
    }

    pub fn evaluate(&self, value: &T) -> Validity {
        match ((self.check_fn)(value), &self.message_override) {
            (Validity::Invalid(_), Some(message)) => Validity::Invalid(message.clone()),
            (validity, _) => validity,
        }
    }
}

impl<T: PartialOrd + Display + 'static> ValidationRule<T> {
    /// Inclusive on both ends.
    pub fn range(min: T, max: T) -> Self {
        let message = format!("The value must be between {min} and {max}");
        Self::predicate(message, move |value| *value >= min && *value <= max)
    }

    pub fn min(min: T) -> Self {
        let message = format!("The value must be at least {min}");
        Self::predicate(message, move |value| *value >= min)
    }

    pub fn max(max: T) -> Self {
        let message = format!("The value must be at most {max}");
        Self::predicate(message, move |value| *value <= max)
    }
}

impl<T: AsRef<str> + 'static> ValidationRule<T> {
    /// Whitespace only doesn't count.
    #[must_use]
    pub fn required() -> Self {
        Self::predicate("A value is required", |value: &T| {
            !value.as_ref().trim().is_empty()
        })
    }

    /// Length is counted in chars.
    #[must_use]
    pub fn min_length(min: usize) -> Self {
        let message = format!("The value must be at least {min} characters long");
        Self::predicate(message, move |value: &T| {
            value.as_ref().chars().count() >= min
        })
    }

    #[must_use]
    pub fn max_length(max: usize) -> Self {
        let message = format!("The value must be at most {max} characters long");
        Self::predicate(message, move |value: &T| {
            value.as_ref().chars().count() <= max
        })
    }

    /// Case insensitive, for any script (eg: `"ÄRGER"` matches `"ärger"`).
    pub fn one_of<S: Into<String>>(allowed: impl IntoIterator<Item = S>) -> Self {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        let message = format!("The value must be one of: {}", allowed.join(", "));
        let allowed_lowercase: Vec<String> =
            allowed.iter().map(|it| it.to_lowercase()).collect();
        Self::predicate(message, move |value: &T| {
            let value = value.as_ref().to_lowercase();
            allowed_lowercase.contains(&value)
        })
    }
}

/// An ordered list of rules. Every rule is evaluated (there is no short circuit), and
/// the messages of the failing ones are joined with a newline, in order. An empty list
/// accepts everything.
pub struct ValidationRules<T> {
    rules: Vec<ValidationRule<T>>,
}

impl<T> Debug for ValidationRules<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.rules).finish()
    }
}

impl<T> Default for ValidationRules<T> {
    fn default() -> Self { Self { rules: vec![] } }
}

impl<T> From<Vec<ValidationRule<T>>> for ValidationRules<T> {
    fn from(rules: Vec<ValidationRule<T>>) -> Self { Self { rules } }
}

impl<T> FromIterator<ValidationRule<T>> for ValidationRules<T> {
    fn from_iter<I: IntoIterator<Item = ValidationRule<T>>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<T: 'static> ValidationRules<T> {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, rule: ValidationRule<T>) { self.rules.push(rule); }

    #[must_use]
    pub fn len(&self) -> usize { self.rules.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.rules.is_empty() }

    pub fn evaluate(&self, value: &T) -> Validity {
        let failures: Vec<String> = self
            .rules
            .iter()
            .filter_map(|rule| match rule.evaluate(value) {
                Validity::Valid => None,
                Validity::Invalid(message) => Some(message),
            })
            .collect();

        if failures.is_empty() {
            Validity::Valid
        } else {
            Validity::Invalid(failures.join("\n"))
        }
    }
}
