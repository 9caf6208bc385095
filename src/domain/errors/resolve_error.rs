//! Emote resolution error types.

use thiserror::Error;

/// Emote resolution error variants.
///
/// None of these cross the resolver boundary; the resolver maps every failure
/// to an absent result and memoizes the permanent ones. The taxonomy matters
/// inside the resolution pipeline, where transient failures must not be
/// memoized.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum ResolveError {
    #[error("no asset for emote: {name}")]
    NotFound { name: String },

    #[error("failed to decode {name}: {reason}")]
    DecodeFailed { name: String, reason: String },

    #[error("resource exhaustion while materializing {name}")]
    ResourceExhausted { name: String },

    #[error("metadata store failure: {message}")]
    Store { message: String },
}

impl ResolveError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DecodeFailed {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a resource-exhaustion error.
    #[must_use]
    pub fn exhausted(name: impl Into<String>) -> Self {
        Self::ResourceExhausted { name: name.into() }
    }

    /// Creates a store error.
    #[must_use]
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Returns whether the failure is transient.
    ///
    /// Transient failures are never blacklisted; the next lookup retries full
    /// resolution. Everything else is permanent for the process lifetime.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::ResourceExhausted { .. })
    }
}
