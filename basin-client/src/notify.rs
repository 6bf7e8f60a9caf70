//! Transient user-facing notices.

use std::time::Duration;

/// Fire-and-forget sink for short status notices.
///
/// The client reports save and remove outcomes here and never inspects the
/// result; how (or whether) the message is rendered is the embedder's
/// business. Implementations must not block.
pub trait Notifier: Send + Sync {
    /// Shows `message` for roughly `duration`.
    fn show(&self, message: &str, duration: Duration);
}

/// Notifier that drops every message. Installed by
/// [`Client::new`](crate::Client::new).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn show(&self, _message: &str, _duration: Duration) {}
}
