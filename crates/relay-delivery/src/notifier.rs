//! One-shot completion handles.

use tokio::sync::oneshot;
use tracing::debug;

/// Completion handle that can be invoked at most once.
///
/// `notify` consumes the handle, so the exactly-once guarantee is carried by
/// the type rather than by a runtime flag. Dropping the handle without
/// notifying is observed by the receiving side as
/// [`DeliveryError::Dropped`](crate::DeliveryError::Dropped).
#[derive(Debug)]
pub struct Notifier<P> {
    sender: oneshot::Sender<P>,
}

impl<P> Notifier<P> {
    pub(crate) fn channel() -> (Self, oneshot::Receiver<P>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    /// Deliver the outcome to whoever holds the receiving side.
    pub fn notify(self, payload: P) {
        if self.sender.send(payload).is_err() {
            debug!("completion receiver dropped before notification");
        }
    }

    /// Turn the handle into a plain callback accepted by callback-form
    /// operations.
    pub fn into_callback(self) -> impl FnOnce(P) + Send + 'static
    where
        P: Send + 'static,
    {
        move |payload| self.notify(payload)
    }
}
