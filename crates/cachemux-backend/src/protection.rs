//! At-rest protection capability traits.
//!
//! Protection itself lives outside this system; the policy layer only needs
//! a capability object that can protect and unprotect byte payloads, keyed
//! by a purpose string. Each named distributed cache obtains its own
//! protector with purpose = the cache name, so payloads protected for one
//! cache cannot be replayed into another.

use thiserror::Error;

/// A protector-level failure.
#[derive(Debug, Error)]
pub enum ProtectionError {
    /// Protecting or unprotecting a payload failed.
    #[error("protection failed: {message}")]
    Failed {
        /// Description of the failure.
        message: String,
    },
}

impl ProtectionError {
    /// Creates a new `Failed` error.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// A purpose-scoped at-rest protector.
pub trait Protector: Send + Sync {
    /// Protects a payload for storage.
    fn protect(&self, data: &[u8]) -> Result<Vec<u8>, ProtectionError>;

    /// Reverses [`protect`](Self::protect).
    fn unprotect(&self, data: &[u8]) -> Result<Vec<u8>, ProtectionError>;
}

/// Creates purpose-scoped protectors.
///
/// May be entirely absent from a process; see [`NoopProtector`].
pub trait ProtectionProvider: Send + Sync {
    /// Creates a protector scoped to the given purpose string.
    fn create_protector(&self, purpose: &str) -> Box<dyn Protector>;
}

/// The identity protector, used when no protection provider is configured.
///
/// Keeps encrypted-policy caches functional (protection becomes a pass-
/// through) instead of failing the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProtector;

impl Protector for NoopProtector {
    fn protect(&self, data: &[u8]) -> Result<Vec<u8>, ProtectionError> {
        Ok(data.to_vec())
    }

    fn unprotect(&self, data: &[u8]) -> Result<Vec<u8>, ProtectionError> {
        Ok(data.to_vec())
    }
}
