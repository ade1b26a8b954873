// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DefaultColors, NotificationBehavior, NotificationChain,
            SharedNotificationBehavior};

/// How a [`Console`](crate::Console) reacts to invalid input, and which colors it uses.
///
/// ```
/// use r3bl_prompt::{BeepBehavior, ConsoleOptions, NotificationKind};
///
/// let options = ConsoleOptions::default()
///     .throw_on_invalid_input(false)
///     .add_behavior(BeepBehavior);
/// assert_eq!(
///     options.notification_chain.kinds(),
///     vec![NotificationKind::Standard, NotificationKind::Beep]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConsoleOptions {
    /// Return [`ReadLineError::FailFast`](crate::ReadLineError::FailFast) on the first
    /// invalid input, instead of asking again. The notification chain still runs first.
    pub throw_on_invalid_input: bool,
    pub notification_chain: NotificationChain,
    pub colors: DefaultColors,
}

impl ConsoleOptions {
    #[must_use]
    pub fn throw_on_invalid_input(mut self, throw_on_invalid_input: bool) -> Self {
        self.throw_on_invalid_input = throw_on_invalid_input;
        self
    }

    /// Does nothing if a behavior of the same kind is already in the chain.
    #[must_use]
    pub fn add_behavior(mut self, behavior: impl NotificationBehavior + 'static) -> Self {
        self.notification_chain.add(behavior);
        self
    }

    #[must_use]
    pub fn add_shared_behavior(mut self, behavior: SharedNotificationBehavior) -> Self {
        self.notification_chain.add_shared(behavior);
        self
    }

    #[must_use]
    pub fn short_circuit_on_stop_chain(mut self, enabled: bool) -> Self {
        self.notification_chain.short_circuit_on_stop_chain(enabled);
        self
    }

    #[must_use]
    pub fn colors(mut self, colors: DefaultColors) -> Self {
        self.colors = colors;
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ConsoleColor, CustomBehavior, NotificationKind, StandardBehavior};

    #[test]
    fn test_defaults() {
        let options = ConsoleOptions::default();
        assert!(!options.throw_on_invalid_input);
        assert_eq!(options.notification_chain.kinds(), vec![NotificationKind::Standard]);
        assert_eq!(options.colors, DefaultColors::default());
    }

    #[test]
    fn test_duplicate_kind_is_ignored() {
        let options = ConsoleOptions::default()
            .add_behavior(CustomBehavior::without_message(|| {}, false))
            .add_behavior(StandardBehavior);
        assert_eq!(options.notification_chain.len(), 2);
        assert!(options.notification_chain.contains(NotificationKind::Custom));
    }

    #[test]
    fn test_colors() {
        let colors = DefaultColors {
            error: ConsoleColor::Red,
            ..DefaultColors::default()
        };
        let options = ConsoleOptions::default().colors(colors);
        assert_eq!(options.colors.error, ConsoleColor::Red);
    }
}
