// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Queue crossterm commands on an already locked writer, propagating any
/// [`std::io::Error`] with `?`. The caller holds the lock for the span of operations it
/// wishes to perform, which keeps the output order deterministic when several threads
/// write to the same device (eg: the status bar restore thread).
#[macro_export]
macro_rules! queue_commands_no_lock {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        $(
            ::crossterm::QueueableCommand::queue(
                $writer,
                $command
            )?;
        )*
    }}
}

/// This is similar to [`queue_commands_no_lock!`], but it also flushes the writer once
/// all the commands have been queued.
#[macro_export]
macro_rules! execute_commands_no_lock {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        $(
            ::crossterm::QueueableCommand::queue(
                $writer,
                $command
            )?;
        )*
        ::std::io::Write::flush($writer)?;
    }}
}
