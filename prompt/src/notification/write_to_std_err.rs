// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use crate::{NotificationBehavior, NotificationContext, NotificationKind, lock_or_recover};

/// Prints the message to stderr, which is useful when stdout is piped into another
/// program and the error should still reach the user.
#[derive(Debug, Default, Clone, Copy)]
pub struct WriteToStdErrBehavior;

impl NotificationBehavior for WriteToStdErrBehavior {
    fn kind(&self) -> NotificationKind { NotificationKind::StdErr }

    fn notify(
        &self,
        context: &mut NotificationContext<'_>,
        message: &str,
    ) -> io::Result<bool> {
        let color = context.colors.error_color();
        lock_or_recover(context.renderer).write_err_line(message, color)?;
        Ok(self.needs_reposition())
    }
}
