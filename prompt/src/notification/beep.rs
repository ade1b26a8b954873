// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use crate::{NotificationBehavior, NotificationContext, NotificationKind, lock_or_recover};

/// Rings the terminal bell. The message is not shown.
#[derive(Debug, Default, Clone, Copy)]
pub struct BeepBehavior;

impl NotificationBehavior for BeepBehavior {
    fn kind(&self) -> NotificationKind { NotificationKind::Beep }

    fn notify(
        &self,
        context: &mut NotificationContext<'_>,
        _message: &str,
    ) -> io::Result<bool> {
        lock_or_recover(context.renderer).beep()?;
        Ok(self.needs_reposition())
    }
}
