//! Conversions between the single-outcome and completion-notifier conventions.
//!
//! # Design
//! - `deliver`/`spawn_delivery` expose a `Result` future through a notifier.
//! - `promisify`/`promisify_single_slot` run a callback-form starter and await
//!   its one completion as a `Result`.
//! - Each adapter invokes or awaits the notifier exactly once.

use std::future::Future;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::completion::{Completion, Delivered};
use crate::error::DeliveryError;
use crate::notifier::Notifier;

/// Await `operation` and hand its outcome to `notify` as a [`Completion`].
pub async fn deliver<T, E, F, C>(operation: F, notify: C)
where
    F: Future<Output = Result<T, E>> + Send,
    C: FnOnce(Completion<T, E>) + Send,
{
    let completion = Completion::from(operation.await);
    debug!(failed = completion.is_failure(), "delivering completion");
    notify(completion);
}

/// Run `operation` on the tokio runtime and notify when it settles.
///
/// The caller is not suspended; the returned handle resolves once the
/// notifier has been invoked.
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn spawn_delivery<T, E, F, C>(operation: F, notify: C) -> JoinHandle<()>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    C: FnOnce(Completion<T, E>) + Send + 'static,
{
    tokio::spawn(deliver(operation, notify))
}

/// Run `operation` on the tokio runtime and notify through a single slot.
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn spawn_single_slot<T, E, F, C>(operation: F, notify: C) -> JoinHandle<()>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    C: FnOnce(Delivered<T, E>) + Send + 'static,
{
    tokio::spawn(async move {
        let delivered = Delivered::from(operation.await);
        debug!(failed = delivered.is_error(), "delivering single-slot outcome");
        notify(delivered);
    })
}

/// Await the single completion of a callback-form operation.
///
/// `start` receives a fresh [`Notifier`] and is expected to pass it (usually
/// via [`Notifier::into_callback`]) to the operation. Whatever `start` returns,
/// such as a task handle, is dropped once the completion arrives.
///
/// # Errors
///
/// Returns [`DeliveryError::Failed`] with the producer's failure,
/// [`DeliveryError::Empty`] when neither slot was populated, or
/// [`DeliveryError::Dropped`] when the notifier was never invoked.
pub async fn promisify<T, E, S, R>(start: S) -> Result<T, DeliveryError<E>>
where
    T: Send,
    E: Send,
    S: FnOnce(Notifier<Completion<T, E>>) -> R,
    R: Send,
{
    let (notifier, receiver) = Notifier::channel();
    let _started = start(notifier);
    let completion = receiver.await.map_err(|_| DeliveryError::Dropped)?;
    completion.into_result()
}

/// Await the outcome of a single-slot callback-form operation.
///
/// The delivered variant is inspected explicitly and bridged into the
/// two-slot convention before collapsing.
///
/// # Errors
///
/// Returns [`DeliveryError::Failed`] when the producer delivered
/// [`Delivered::Error`], or [`DeliveryError::Dropped`] when the notifier was
/// never invoked.
pub async fn promisify_single_slot<T, E, S, R>(start: S) -> Result<T, DeliveryError<E>>
where
    T: Send,
    E: Send,
    S: FnOnce(Notifier<Delivered<T, E>>) -> R,
    R: Send,
{
    let (notifier, receiver) = Notifier::channel();
    let _started = start(notifier);
    let delivered = receiver.await.map_err(|_| DeliveryError::Dropped)?;
    delivered.into_completion().into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn deliver_notifies_once_with_value() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        deliver(async { Ok::<_, io::Error>(42_u16) }, move |completion| {
            if let Ok(mut seen) = sink.lock() {
                seen.push(completion.value);
            }
        })
        .await;

        let seen = calls.lock().map(|seen| seen.clone()).unwrap_or_default();
        assert_eq!(seen, vec![Some(42)]);
    }

    #[test]
    #[should_panic(expected = "Tokio")]
    fn spawn_delivery_requires_runtime() {
        let _handle = spawn_delivery(async { Ok::<_, io::Error>(1_u8) }, |_completion| {});
    }

    #[test]
    #[should_panic(expected = "Tokio")]
    fn spawn_single_slot_requires_runtime() {
        let _handle = spawn_single_slot(async { Ok::<_, io::Error>(1_u8) }, |_delivered| {});
    }

    #[tokio::test]
    async fn spawn_delivery_forwards_failure() -> anyhow::Result<()> {
        let (notifier, receiver) = Notifier::<Completion<u16, io::Error>>::channel();
        let handle = spawn_delivery(
            async { Err::<u16, _>(io::Error::new(io::ErrorKind::NotFound, "missing")) },
            notifier.into_callback(),
        );
        handle.await?;

        let completion = receiver.await?;
        assert!(completion.value.is_none());
        assert_eq!(
            completion.error.map(|err| err.kind()),
            Some(io::ErrorKind::NotFound)
        );
        Ok(())
    }

    #[tokio::test]
    async fn promisify_resolves_callback_value() {
        let outcome: Result<String, DeliveryError<io::Error>> = promisify(|notifier| {
            spawn_delivery(
                async { Ok::<_, io::Error>("a".to_string()) },
                notifier.into_callback(),
            )
        })
        .await;
        assert_eq!(outcome.ok().as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn promisify_surfaces_callback_failure() {
        let outcome: Result<String, DeliveryError<io::Error>> = promisify(|notifier| {
            notifier.notify(Completion::failed(io::Error::other("denied")));
        })
        .await;
        let failure = outcome.err().and_then(DeliveryError::into_failure);
        assert_eq!(failure.map(|err| err.to_string()).as_deref(), Some("denied"));
    }

    #[tokio::test]
    async fn promisify_reports_dropped_notifier() {
        let outcome: Result<u8, DeliveryError<io::Error>> = promisify(drop).await;
        assert!(matches!(outcome, Err(DeliveryError::Dropped)));
    }

    #[tokio::test]
    async fn promisify_reports_empty_completion() {
        let outcome: Result<u8, DeliveryError<io::Error>> = promisify(|notifier| {
            notifier.notify(Completion {
                error: None,
                value: None,
            });
        })
        .await;
        assert!(matches!(outcome, Err(DeliveryError::Empty)));
    }

    #[tokio::test]
    async fn single_slot_bridge_inspects_variant() {
        let success: Result<String, DeliveryError<io::Error>> =
            promisify_single_slot(|notifier| {
                spawn_single_slot(
                    async { Ok::<_, io::Error>("x lol".to_string()) },
                    notifier.into_callback(),
                )
            })
            .await;
        assert_eq!(success.ok().as_deref(), Some("x lol"));

        let failure: Result<String, DeliveryError<io::Error>> = promisify_single_slot(|notifier| {
            notifier.notify(Delivered::Error(io::Error::other("unreadable")));
        })
        .await;
        assert!(matches!(failure, Err(DeliveryError::Failed(_))));
    }
}
