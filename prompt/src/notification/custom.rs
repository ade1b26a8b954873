// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use crate::{NotificationBehavior, NotificationContext, NotificationKind};

type NotifyFn = Box<dyn Fn(&str) + Send + Sync>;

/// Calls your closure with the message.
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use r3bl_prompt::{ConsoleOptions, CustomBehavior};
///
/// let log = Arc::new(Mutex::new(Vec::<String>::new()));
/// let log_clone = log.clone();
/// let options = ConsoleOptions::default().add_behavior(CustomBehavior::new(
///     move |message| log_clone.lock().unwrap().push(message.to_string()),
///     false,
/// ));
/// assert_eq!(options.notification_chain.len(), 2);
/// ```
pub struct CustomBehavior {
    notify_fn: NotifyFn,
    needs_reposition: bool,
}

impl std::fmt::Debug for CustomBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomBehavior")
            .field("needs_reposition", &self.needs_reposition)
            .finish_non_exhaustive()
    }
}

impl CustomBehavior {
    pub fn new(
        notify_fn: impl Fn(&str) + Send + Sync + 'static,
        needs_reposition: bool,
    ) -> Self {
        Self {
            notify_fn: Box::new(notify_fn),
            needs_reposition,
        }
    }

    /// For a closure that doesn't care about the message.
    pub fn without_message(
        notify_fn: impl Fn() + Send + Sync + 'static,
        needs_reposition: bool,
    ) -> Self {
        Self::new(move |_| notify_fn(), needs_reposition)
    }
}

impl NotificationBehavior for CustomBehavior {
    fn kind(&self) -> NotificationKind { NotificationKind::Custom }

    fn needs_reposition(&self) -> bool { self.needs_reposition }

    fn notify(
        &self,
        _context: &mut NotificationContext<'_>,
        message: &str,
    ) -> io::Result<bool> {
        (self.notify_fn)(message);
        Ok(self.needs_reposition())
    }
}
