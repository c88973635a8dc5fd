//! Error types for delivery adapters.

use thiserror::Error;

/// Failures observed when collapsing a completion into a single outcome.
#[derive(Debug, Error)]
pub enum DeliveryError<E> {
    /// The producer reported a failure through the error slot.
    #[error(transparent)]
    Failed(E),
    /// A completion carried neither an error nor a value.
    #[error("completion carried neither an error nor a value")]
    Empty,
    /// The completion notifier was dropped without being invoked.
    #[error("completion notifier dropped before it was invoked")]
    Dropped,
}

impl<E> DeliveryError<E> {
    /// Consume the error and return the producer failure, if this is one.
    #[must_use]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Empty | Self::Dropped => None,
        }
    }
}
