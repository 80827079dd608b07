use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::mpsc;

/// Per-request state handed to the example handlers.
///
/// Clones share the same notification channel and counters.
#[derive(Debug, Clone)]
pub struct ExampleContext {
    notifications: mpsc::UnboundedSender<String>,
    admin_resets: Arc<AtomicUsize>,
}

impl ExampleContext {
    /// Returns the context and the receiving end of its notification channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (notifications, receiver) = mpsc::unbounded_channel();
        (
            Self {
                notifications,
                admin_resets: Arc::new(AtomicUsize::new(0)),
            },
            receiver,
        )
    }

    pub fn notify(&self, message: String) {
        // The receiver may already be gone; nothing is waiting on it then.
        if self.notifications.send(message).is_err() {
            tracing::debug!("Notification channel closed");
        }
    }

    pub fn record_admin_reset(&self) -> usize {
        self.admin_resets.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// How many times `Admin.reset` has actually run.
    pub fn admin_reset_count(&self) -> usize {
        self.admin_resets.load(Ordering::SeqCst)
    }
}
