//! Error types surfaced by cache handles.
//!
//! This module defines the errors a policy-enforcing cache handle can
//! return. Backend implementations report their own failures through the
//! opaque [`BackendError`], which the policy layer propagates unchanged —
//! no retry, no suppression, no translation.

use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// A caller-supplied argument was invalid (empty name, empty key,
    /// empty value where one is required).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    /// At-rest protection failed while protecting or unprotecting a payload.
    #[error("Protection error: {message}")]
    Protection {
        /// Description of the protection failure.
        message: String,
    },

    /// A typed payload could not be encoded or decoded.
    #[error("Codec error: {message}")]
    Codec {
        /// Description of the codec failure.
        message: String,
    },

    /// A failure originating in the wrapped backend, passed through as-is.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl CacheError {
    /// Creates a new `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a new `Protection` error.
    #[must_use]
    pub fn protection(message: impl Into<String>) -> Self {
        Self::Protection {
            message: message.into(),
        }
    }

    /// Creates a new `Codec` error.
    #[must_use]
    pub fn codec(message: impl Into<String>) -> Self {
        Self::Codec {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an invalid argument error.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` if this is a protection error.
    #[must_use]
    pub fn is_protection(&self) -> bool {
        matches!(self, Self::Protection { .. })
    }

    /// Returns `true` if this error originated in the wrapped backend.
    #[must_use]
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend(_))
    }

    /// Returns the error category for logging/monitoring purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Validation,
            Self::Protection { .. } => ErrorCategory::Protection,
            Self::Codec { .. } => ErrorCategory::Codec,
            Self::Backend(_) => ErrorCategory::Backend,
        }
    }
}

/// An opaque failure reported by a backend implementation.
///
/// The policy layer never constructs or inspects these; it only forwards
/// them to the caller wrapped in [`CacheError::Backend`].
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct BackendError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl BackendError {
    /// Wraps an arbitrary error reported by a backend.
    #[must_use]
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Categories of cache errors for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Caller-supplied argument validation.
    Validation,
    /// At-rest protection.
    Protection,
    /// Typed payload encoding/decoding.
    Codec,
    /// Wrapped-backend failure.
    Backend,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Protection => write!(f, "protection"),
            Self::Codec => write!(f, "codec"),
            Self::Backend => write!(f, "backend"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CacheError::invalid_argument("'key' cannot be empty");
        assert_eq!(err.to_string(), "Invalid argument: 'key' cannot be empty");

        let err = CacheError::protection("bad keyring");
        assert_eq!(err.to_string(), "Protection error: bad keyring");
    }

    #[test]
    fn test_backend_errors_pass_through_unchanged() {
        let err = CacheError::from(BackendError::new("connection refused"));
        assert!(err.is_backend());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_error_predicates_and_categories() {
        let err = CacheError::invalid_argument("empty");
        assert!(err.is_invalid_argument());
        assert!(!err.is_protection());
        assert_eq!(err.category(), ErrorCategory::Validation);

        assert_eq!(
            CacheError::codec("bad json").category(),
            ErrorCategory::Codec
        );
        assert_eq!(ErrorCategory::Backend.to_string(), "backend");
    }
}
