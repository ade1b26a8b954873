// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use crate::{NotificationBehavior, NotificationContext, NotificationKind, lock_or_recover};

/// Prints the message on the line after the prompt, in the error color. Every
/// [`NotificationChain`](crate::NotificationChain) starts with this one.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardBehavior;

impl NotificationBehavior for StandardBehavior {
    fn kind(&self) -> NotificationKind { NotificationKind::Standard }

    fn notify(
        &self,
        context: &mut NotificationContext<'_>,
        message: &str,
    ) -> io::Result<bool> {
        let color = context.colors.error_color();
        lock_or_recover(context.renderer).write_line(message, color)?;
        Ok(self.needs_reposition())
    }
}
