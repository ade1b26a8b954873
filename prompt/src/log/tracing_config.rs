// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::try_create_layers;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where log output goes, and at which level. Any number of things convert into this,
/// see the `From` impls, and two configs can be merged with `+`.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// The `String` is the path of the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl Default for TracingConfig {
    fn default() -> Self { Self::from(LevelFilter::DEBUG) }
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    /// Global default subscriber, which once set, can't be unset or changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or a global subscriber has
    /// already been installed.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(&self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// Thread local subscriber, which is active until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = try_create_layers(&self)?;
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { Self::from(LevelFilter::from_level(level)) }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(display_preference: DisplayPreference) -> Self {
        Self::from(WriterConfig::Display(display_preference))
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// Merge two [`TracingConfig`] instances together. The more verbose level wins.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// Merge two [`WriterConfig`] instances together. The `rhs` will clobber the `self` if
/// it has a "some" value. That is, the value in `rhs` has higher specificity.
///
/// - `Display(a) + File(b) = DisplayAndFile(a, b)`.
/// - `File(a) + File(b) = File(b)`.
/// - `DisplayAndFile(a, b) + Display(c) = DisplayAndFile(c, b)`.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            // No collision merge.
            (None, rhs) => rhs,
            (lhs, None) => lhs,
            (Display(display_lhs), File(file_rhs)) => DisplayAndFile(display_lhs, file_rhs),
            (File(file_lhs), Display(display_rhs)) => DisplayAndFile(display_rhs, file_lhs),

            // Collision (rhs has higher specificity).
            (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(display, file)) => {
                DisplayAndFile(display, file)
            }
            (Display(_), Display(display_rhs)) => Display(display_rhs),
            (File(_), File(file_rhs)) => File(file_rhs),
            (DisplayAndFile(_, file_lhs), Display(display_rhs)) => {
                DisplayAndFile(display_rhs, file_lhs)
            }
            (DisplayAndFile(display_lhs, _), File(file_rhs)) => {
                DisplayAndFile(display_lhs, file_rhs)
            }
        }
    }
}
