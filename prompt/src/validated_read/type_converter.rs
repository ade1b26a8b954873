// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Display, str::FromStr};

use crate::InvalidInput;

type ConvertFn<T> = Box<dyn Fn(&str) -> Result<T, String>>;

/// Turns a raw line into a `T`. A failure is reported as
/// [`InvalidInput::Conversion`], which the read loop treats just like a rule that
/// rejected the value.
pub struct TypeConverter<T> {
    convert_fn: ConvertFn<T>,
}

impl<T> std::fmt::Debug for TypeConverter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeConverter")
            .field("target", &short_type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T> TypeConverter<T> {
    /// Use your own parser. The `Err` string is shown to the user as is.
    pub fn new(convert_fn: impl Fn(&str) -> Result<T, String> + 'static) -> Self {
        Self {
            convert_fn: Box::new(convert_fn),
        }
    }

    /// # Errors
    ///
    /// Returns [`InvalidInput::Conversion`] if the raw text can't be converted.
    pub fn convert(&self, raw: &str) -> Result<T, InvalidInput> {
        (self.convert_fn)(raw).map_err(|message| InvalidInput::Conversion {
            raw: raw.to_string(),
            message,
        })
    }
}

impl<T> TypeConverter<T>
where
    T: FromStr + 'static,
    T::Err: Display,
{
    /// Parse with [`FromStr`]. If the exact text doesn't parse, it is tried again with
    /// the surrounding whitespace trimmed, so `" 42 "` is a valid `i32`, while a
    /// `String` target gets exactly what was typed.
    #[must_use]
    pub fn parse() -> Self {
        Self::new(|raw| match raw.parse::<T>() {
            Ok(value) => Ok(value),
            Err(err) => {
                let trimmed = raw.trim();
                if trimmed.len() != raw.len()
                    && let Ok(value) = trimmed.parse::<T>()
                {
                    return Ok(value);
                }
                Err(format!(
                    "'{raw}' is not a valid {}: {err}",
                    short_type_name::<T>()
                ))
            }
        })
    }
}

impl<T> Default for TypeConverter<T>
where
    T: FromStr + 'static,
    T::Err: Display,
{
    fn default() -> Self { Self::parse() }
}

/// `alloc::string::String` -> `String`, `i32` -> `i32`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}
