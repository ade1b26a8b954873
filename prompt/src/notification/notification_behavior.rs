// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use strum_macros::Display;

use crate::{DefaultColors, LineReader, SharedRenderer};

/// Identity of a behavior in a [`NotificationChain`](crate::NotificationChain). Two
/// behaviors of the same kind are considered the same, regardless of how they are
/// configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NotificationKind {
    Standard,
    StdErr,
    Beep,
    Custom,
    StatusBar,
    /// For behaviors defined outside this crate.
    Other(&'static str),
}

/// What a behavior gets to work with when it is invoked.
#[allow(missing_debug_implementations)]
pub struct NotificationContext<'a> {
    /// Lock it for each group of writes that belong together.
    pub renderer: &'a SharedRenderer,
    /// The read loop holds the reader for its whole duration, so it is lent here, eg:
    /// to wait for a key press.
    pub reader: &'a mut dyn LineReader,
    pub colors: &'a DefaultColors,
}

/// A way of telling the user that their input was rejected.
pub trait NotificationBehavior: Send + Sync {
    fn kind(&self) -> NotificationKind;

    /// Whether the read loop must erase the rejected attempt and move the cursor back
    /// after this behavior runs. Fixed when the behavior is created.
    fn needs_reposition(&self) -> bool { false }

    /// A chain with short circuit enabled stops after a behavior that returns `true`.
    fn stop_chain(&self) -> bool { false }

    /// Show `message` to the user. Returns [`Self::needs_reposition()`].
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal can't be written to.
    fn notify(
        &self,
        context: &mut NotificationContext<'_>,
        message: &str,
    ) -> io::Result<bool>;
}
