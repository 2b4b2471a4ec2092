//! Notification and confirmation capabilities.
//!
//! The console never owns a real toast surface or dialog. Both are injected
//! so hosts can wire their UI and tests can assert on calls.

/// Fire-and-forget success/error notifications (toast surface).
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Interactive yes/no confirmation before destructive actions.
pub trait ConfirmPrompt: Send + Sync {
    /// Returns true when the operator confirmed the action.
    fn confirm(&self, message: &str) -> bool;
}

/// Notifier that routes toasts into structured logs. Useful as a default
/// when the host has no toast surface wired yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "console::notify", toast = message, "notify success");
    }

    fn error(&self, message: &str) {
        tracing::warn!(target: "console::notify", toast = message, "notify error");
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}

impl<P: ConfirmPrompt + ?Sized> ConfirmPrompt for std::sync::Arc<P> {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}
