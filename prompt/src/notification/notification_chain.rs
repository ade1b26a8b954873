// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io, sync::Arc};

use crate::{NotificationBehavior, NotificationContext, NotificationKind, StandardBehavior};

pub type SharedNotificationBehavior = Arc<dyn NotificationBehavior>;

/// The behaviors that are run, in the order they were added, when input is rejected.
///
/// - It always starts with [`StandardBehavior`].
/// - It never holds two behaviors of the same [`NotificationKind`]; adding a kind that
///   is already present does nothing.
/// - Every behavior runs, unless [`Self::short_circuit_on_stop_chain()`] is enabled.
#[derive(Clone)]
pub struct NotificationChain {
    behaviors: Vec<SharedNotificationBehavior>,
    short_circuit_on_stop_chain: bool,
}

impl std::fmt::Debug for NotificationChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationChain")
            .field("kinds", &self.kinds())
            .field("short_circuit_on_stop_chain", &self.short_circuit_on_stop_chain)
            .finish()
    }
}

impl Default for NotificationChain {
    fn default() -> Self {
        Self {
            behaviors: vec![Arc::new(StandardBehavior)],
            short_circuit_on_stop_chain: false,
        }
    }
}

impl NotificationChain {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Returns `false` (and drops `behavior`) if its kind is already in the chain.
    pub fn add(&mut self, behavior: impl NotificationBehavior + 'static) -> bool {
        self.add_shared(Arc::new(behavior))
    }

    /// Same as [`Self::add()`], for when the caller wants to keep a handle to the
    /// behavior, eg: to call
    /// [`StatusBarBehavior::wait_for_pending_restore()`](crate::StatusBarBehavior::wait_for_pending_restore).
    pub fn add_shared(&mut self, behavior: SharedNotificationBehavior) -> bool {
        let kind = behavior.kind();
        if self.contains(kind) {
            tracing::debug!(message = "Notification behavior already present", %kind);
            return false;
        }
        self.behaviors.push(behavior);
        true
    }

    /// Stop invoking behaviors after the first one whose
    /// [`NotificationBehavior::stop_chain()`] is `true`. Off by default.
    pub fn short_circuit_on_stop_chain(&mut self, enabled: bool) {
        self.short_circuit_on_stop_chain = enabled;
    }

    #[must_use]
    pub fn contains(&self, kind: NotificationKind) -> bool {
        self.behaviors.iter().any(|it| it.kind() == kind)
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<NotificationKind> {
        self.behaviors.iter().map(|it| it.kind()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize { self.behaviors.len() }

    /// Never true, the chain always holds [`StandardBehavior`].
    #[must_use]
    pub fn is_empty(&self) -> bool { self.behaviors.is_empty() }

    /// Invoke the behaviors in order with the same `message`. Returns `true` if any of
    /// the behaviors that ran needs the prompt to be repositioned.
    ///
    /// # Errors
    ///
    /// Returns the first error from a behavior, the rest aren't invoked.
    pub fn invoke_all(
        &self,
        context: &mut NotificationContext<'_>,
        message: &str,
    ) -> io::Result<bool> {
        let mut needs_reposition = false;
        for behavior in &self.behaviors {
            needs_reposition |= behavior.notify(context, message)?;
            if self.short_circuit_on_stop_chain && behavior.stop_chain() {
                break;
            }
        }
        Ok(needs_reposition)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{BeepBehavior, CustomBehavior, DefaultColors, LineReaderMock,
                RendererMock, StatusBarBehavior, WriteToStdErrBehavior,
                new_shared_renderer};

    struct Stopper;

    impl NotificationBehavior for Stopper {
        fn kind(&self) -> NotificationKind { NotificationKind::Other("stopper") }

        fn stop_chain(&self) -> bool { true }

        fn notify(
            &self,
            _context: &mut NotificationContext<'_>,
            _message: &str,
        ) -> io::Result<bool> {
            Ok(false)
        }
    }

    fn invoke(chain: &NotificationChain, message: &str) -> (bool, RendererMock) {
        let mock = RendererMock::default();
        let renderer = new_shared_renderer(mock.clone());
        let mut reader = LineReaderMock::default();
        let colors = DefaultColors::default();
        let mut context = NotificationContext {
            renderer: &renderer,
            reader: &mut reader,
            colors: &colors,
        };
        (chain.invoke_all(&mut context, message).unwrap(), mock)
    }

    #[test]
    fn test_default_has_standard() {
        let chain = NotificationChain::default();
        assert_eq!(chain.kinds(), vec![NotificationKind::Standard]);
        assert!(!chain.is_empty());
    }

    #[test]
    fn test_add_same_kind_is_noop() {
        let mut chain = NotificationChain::default();
        assert!(chain.add(CustomBehavior::new(|_| {}, false)));
        assert!(!chain.add(StandardBehavior));
        assert!(!chain.add(CustomBehavior::new(|_| {}, true)));
        assert_eq!(chain.len(), 2);
        assert_eq!(
            chain.kinds(),
            vec![NotificationKind::Standard, NotificationKind::Custom]
        );
    }

    #[test]
    fn test_invoke_all_runs_in_order_and_ors_reposition() {
        let calls = Arc::new(Mutex::new(vec![]));
        let calls_clone = calls.clone();
        let mut chain = NotificationChain::default();
        chain.add(BeepBehavior);
        chain.add(WriteToStdErrBehavior);
        chain.add(CustomBehavior::new(
            move |message| calls_clone.lock().unwrap().push(message.to_string()),
            true,
        ));

        let (needs_reposition, mock) = invoke(&chain, "nope");
        assert!(needs_reposition);
        assert_eq!(mock.screen_lines(), vec!["nope".to_string()]);
        assert_eq!(mock.beep_count(), 1);
        assert_eq!(mock.stderr_lines(), vec!["nope".to_string()]);
        assert_eq!(*calls.lock().unwrap(), vec!["nope".to_string()]);
    }

    #[test]
    fn test_no_reposition_without_a_behavior_asking_for_it() {
        let mut chain = NotificationChain::default();
        chain.add(BeepBehavior);
        let (needs_reposition, _) = invoke(&chain, "nope");
        assert!(!needs_reposition);
    }

    #[test]
    fn test_stop_chain_ignored_by_default() {
        let mut chain = NotificationChain::default();
        chain.add(Stopper);
        chain.add(BeepBehavior);
        let (_, mock) = invoke(&chain, "nope");
        assert_eq!(mock.beep_count(), 1);
    }

    #[test]
    fn test_stop_chain_short_circuit() {
        let mut chain = NotificationChain::default();
        chain.add(Stopper);
        chain.add(BeepBehavior);
        chain.short_circuit_on_stop_chain(true);
        let (_, mock) = invoke(&chain, "nope");
        assert_eq!(mock.beep_count(), 0);
        assert_eq!(mock.screen_lines(), vec!["nope".to_string()]);
    }

    #[test]
    fn test_add_shared_keeps_handle() {
        let status_bar = Arc::new(StatusBarBehavior::default());
        let mut chain = NotificationChain::default();
        assert!(chain.add_shared(status_bar.clone()));
        assert!(chain.contains(NotificationKind::StatusBar));
        assert_eq!(Arc::strong_count(&status_bar), 2);
    }
}
