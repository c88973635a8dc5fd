//! Outcome types handed to completion notifiers.
//!
//! # Design
//! - `Completion` is the error-first convention: two slots, failure first.
//! - `Delivered` is the single-slot convention some producers use instead; it
//!   is bridged into a `Completion` by inspecting the variant, never assumed.

use crate::error::DeliveryError;

/// Two-slot outcome passed to an error-first completion notifier.
///
/// Producers populate exactly one slot. Consumers that cannot trust the
/// producer should collapse the pair with [`Completion::into_result`], which
/// checks the error slot first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Completion<T, E> {
    /// Failure slot; populated when the operation failed.
    pub error: Option<E>,
    /// Success slot; populated when the operation succeeded.
    pub value: Option<T>,
}

impl<T, E> Completion<T, E> {
    /// Completion carrying a failure and no value.
    pub const fn failed(error: E) -> Self {
        Self {
            error: Some(error),
            value: None,
        }
    }

    /// Completion carrying a value and no failure.
    pub const fn succeeded(value: T) -> Self {
        Self {
            error: None,
            value: Some(value),
        }
    }

    /// Whether the failure slot is populated.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Collapse the two slots into a single outcome.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Failed`] when the error slot is populated
    /// (regardless of the value slot) and [`DeliveryError::Empty`] when
    /// neither slot is.
    pub fn into_result(self) -> Result<T, DeliveryError<E>> {
        match (self.error, self.value) {
            (Some(error), _) => Err(DeliveryError::Failed(error)),
            (None, Some(value)) => Ok(value),
            (None, None) => Err(DeliveryError::Empty),
        }
    }
}

impl<T, E> From<Result<T, E>> for Completion<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::succeeded(value),
            Err(error) => Self::failed(error),
        }
    }
}

/// Single-slot outcome: a failure object or a success value through one
/// argument.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Delivered<T, E> {
    /// The producer failed.
    Error(E),
    /// The producer succeeded with a value.
    Success(T),
}

impl<T, E> Delivered<T, E> {
    /// Whether the producer delivered a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Bridge into the two-slot convention by inspecting the variant.
    pub fn into_completion(self) -> Completion<T, E> {
        match self {
            Self::Error(error) => Completion::failed(error),
            Self::Success(value) => Completion::succeeded(value),
        }
    }
}

impl<T, E> From<Result<T, E>> for Delivered<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Error(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_slot_wins_over_value_slot() {
        let completion = Completion {
            error: Some("boom"),
            value: Some(1),
        };
        assert!(completion.is_failure());
        assert!(matches!(
            completion.into_result(),
            Err(DeliveryError::Failed("boom"))
        ));
    }

    #[test]
    fn value_slot_resolves_when_error_absent() {
        let completion: Completion<u16, &str> = Completion::succeeded(200);
        assert!(!completion.is_failure());
        assert!(matches!(completion.into_result(), Ok(200)));
    }

    #[test]
    fn empty_completion_is_reported() {
        let completion: Completion<u16, &str> = Completion {
            error: None,
            value: None,
        };
        assert!(matches!(completion.into_result(), Err(DeliveryError::Empty)));
    }

    #[test]
    fn completion_mirrors_result() {
        let ok: Completion<&str, &str> = Ok("line").into();
        assert_eq!(ok, Completion::succeeded("line"));
        let err: Completion<&str, &str> = Err("missing").into();
        assert_eq!(err, Completion::failed("missing"));
    }

    #[test]
    fn delivered_bridges_by_variant() {
        let success: Delivered<String, &str> = Delivered::Success("a lol".to_string());
        assert!(!success.is_error());
        assert_eq!(
            success.into_completion(),
            Completion::succeeded("a lol".to_string())
        );

        let failure: Delivered<String, &str> = Err("unreadable").into();
        assert!(failure.is_error());
        let completion = failure.into_completion();
        assert_eq!(completion.error, Some("unreadable"));
        assert_eq!(completion.value, None);
    }
}
